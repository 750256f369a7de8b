pub mod user;
pub mod insights;

pub use user::*;
pub use insights::*;
