// Utility functions
pub mod error;
pub mod timing;

pub use error::*;
pub use timing::*;
