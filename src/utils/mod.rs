// Utils compartidos

pub mod constants;
pub mod storage;
pub mod google_maps_ffi;

pub use constants::*;
pub use storage::*;
