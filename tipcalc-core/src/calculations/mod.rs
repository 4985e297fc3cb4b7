//! Gratuity calculations for splitting a restaurant check.
//!
//! Everything in here is a pure function of its inputs; the stateful side
//! of the calculator lives in [`crate::models`].

pub mod common;
pub mod gratuity;

pub use gratuity::{GratuityError, TipBreakdown};
