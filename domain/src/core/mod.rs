//! Core domain concepts shared across the crate

pub mod error;
pub mod question;
pub mod source;
