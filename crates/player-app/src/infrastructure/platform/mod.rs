//! Platform storage adapters
//!
//! `PlatformStorage` is the provider for the current target; the composition
//! root builds it through `create_storage`.

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod desktop;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use memory::MemoryStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStorageProvider;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = DesktopStorageProvider;

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = WasmStorageProvider;

/// Create the storage provider for the current platform
pub fn create_storage() -> PlatformStorage {
    PlatformStorage::default()
}
