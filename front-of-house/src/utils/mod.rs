//! Utility modules

pub mod logger;
pub mod text;

pub use text::{contains_ignore_case, locale_cmp};
