/// Process-wide list of scene object ids driven by the host
use std::cell::RefCell;

use log::debug;
use se_core::{checked_index, GrowableArray};

use crate::error::BridgeResult;

thread_local! {
    static OBJECTS: RefCell<GrowableArray<i32>> = RefCell::new(GrowableArray::new());
}

pub fn add_object(id: i32) -> BridgeResult<()> {
    OBJECTS.with(|objects| objects.borrow_mut().append(id))?;
    Ok(())
}

/// Empty the list and return how many ids it held
pub fn remove_objects() -> usize {
    let removed = OBJECTS.with(|objects| objects.borrow_mut().clear());
    debug!("removed {} objects", removed);
    removed
}

pub fn object_count() -> usize {
    OBJECTS.with(|objects| objects.borrow().len())
}

/// Id at a host-supplied position, `None` past the end
pub fn object_at(index: i32) -> BridgeResult<Option<i32>> {
    let index = checked_index(index)?;
    Ok(OBJECTS.with(|objects| objects.borrow().get(index).copied()))
}

pub fn object_ids() -> Vec<i32> {
    OBJECTS.with(|objects| objects.borrow().as_slice().to_vec())
}
