#![deny(missing_debug_implementations)]

pub mod error;
pub mod outcome;
pub mod result;
pub mod steps;

pub use crate::outcome::{error, ok, Outcome};
