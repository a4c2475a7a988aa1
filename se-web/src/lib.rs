/// StructureEngine Web - export table of the scene manager WASM module
///
/// The host drives the module one call at a time through these exports.
/// Scene state lives in thread-local storage, which is process-wide on the
/// single-threaded wasm target.

use wasm_bindgen::prelude::*;

pub mod error;
pub mod memory;
pub mod objects;

pub use error::{BridgeError, BridgeResult};

/// Version string returned by `info`
pub const VERSION_INFO: &str = concat!(
    "StructureEngine scene manager (WASM module)\n",
    "version: ",
    env!("CARGO_PKG_VERSION")
);

fn to_js(err: BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Route `log` output to the browser console, or to stderr on native targets.
/// Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::try_init();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    log::info!("StructureEngine: scene manager (WASM) has been loaded");
}

#[wasm_bindgen]
pub fn info() -> String {
    VERSION_INFO.to_string()
}

#[wasm_bindgen(js_name = requestMemory)]
pub fn request_memory(size: i32) -> Result<usize, JsValue> {
    memory::request_memory(size).map(|ptr| ptr as usize).map_err(to_js)
}

#[wasm_bindgen(js_name = freeMemory)]
pub fn free_memory(ptr: usize) -> Result<(), JsValue> {
    memory::free_memory(ptr as *mut u8).map_err(to_js)
}

#[wasm_bindgen(js_name = addObject)]
pub fn add_object(id: i32) -> Result<(), JsValue> {
    objects::add_object(id).map_err(to_js)
}

/// Clear the object list, returning how many ids were removed
#[wasm_bindgen(js_name = removeObjects)]
pub fn remove_objects() -> usize {
    objects::remove_objects()
}

#[wasm_bindgen(js_name = objectCount)]
pub fn object_count() -> usize {
    objects::object_count()
}

#[wasm_bindgen(js_name = objectAt)]
pub fn object_at(index: i32) -> Result<Option<i32>, JsValue> {
    objects::object_at(index).map_err(to_js)
}

#[wasm_bindgen(js_name = objectIds)]
pub fn object_ids() -> Vec<i32> {
    objects::object_ids()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info() {
        assert!(info().starts_with("StructureEngine scene manager"));
        assert!(info().ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
