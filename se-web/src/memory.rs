/// Raw buffers handed to the host through requestMemory / freeMemory
use std::alloc::{self, Layout};
use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{BridgeError, BridgeResult};

/// Alignment of every buffer given to the host, enough for f64 views
const BUFFER_ALIGN: usize = 8;

thread_local! {
    static LIVE: RefCell<HashMap<usize, Layout>> = RefCell::new(HashMap::new());
}

/// Allocate `size` bytes owned by the caller until `free_memory`.
/// A zero-byte request still yields a unique pointer.
pub fn request_memory(size: i32) -> BridgeResult<*mut u8> {
    let bytes = usize::try_from(size).map_err(|_| {
        warn!("rejected memory request of {} bytes", size);
        BridgeError::NegativeSize(size)
    })?;
    let layout = Layout::from_size_align(bytes.max(1), BUFFER_ALIGN)
        .map_err(|_| BridgeError::InvalidLayout(bytes))?;

    // SAFETY: layout size is at least one byte
    let ptr = unsafe { alloc::alloc(layout) };
    if ptr.is_null() {
        return Err(BridgeError::OutOfMemory(bytes));
    }

    LIVE.with(|live| live.borrow_mut().insert(ptr as usize, layout));
    debug!("allocated {} bytes at {:#x}", bytes, ptr as usize);
    Ok(ptr)
}

/// Release a buffer from `request_memory`. Null is ignored; a pointer that is
/// not live (never allocated, or already freed) is rejected.
pub fn free_memory(ptr: *mut u8) -> BridgeResult<()> {
    if ptr.is_null() {
        return Ok(());
    }

    let address = ptr as usize;
    let layout = LIVE
        .with(|live| live.borrow_mut().remove(&address))
        .ok_or_else(|| {
            warn!("free of unknown pointer {:#x}", address);
            BridgeError::UnknownAllocation(address)
        })?;

    // SAFETY: ptr was returned by alloc with this layout and has just left
    // the registry, so it is deallocated exactly once
    unsafe { alloc::dealloc(ptr, layout) };
    debug!("freed {} bytes at {:#x}", layout.size(), address);
    Ok(())
}

/// Number of buffers the host has not freed yet
pub fn live_allocations() -> usize {
    LIVE.with(|live| live.borrow().len())
}
