pub mod calculations;
pub mod models;

pub use calculations::{GratuityError, TipBreakdown};
pub use models::*;
