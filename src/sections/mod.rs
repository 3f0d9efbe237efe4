//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and
//! returns a typed set of checks with its score contribution.

mod length;
mod variety;

pub use length::{LengthChecks, length_section};
pub use variety::{SPECIAL_CHARS, VarietyChecks, character_variety_section};
