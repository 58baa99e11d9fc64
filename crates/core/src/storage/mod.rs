pub mod format;
pub mod manager;
pub mod memory_store;
pub mod traits;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
