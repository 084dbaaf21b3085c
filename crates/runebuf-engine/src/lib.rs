pub mod buffer;

// Re-export key types for easier usage
pub use buffer::*;
