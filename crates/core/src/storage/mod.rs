pub mod store;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
