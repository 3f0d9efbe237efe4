//! Password strength meter
//!
//! This library evaluates candidate passwords with a fixed-weight scoring
//! function over length and character-class checks, and ships a small web
//! front end (HTML form plus JSON endpoint) behind the `server` feature.
//!
//! # Features
//!
//! - `server` (default): Enables the axum web front end
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_PORT`: Port for the web front end (default: 8080)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{Strength, evaluate_password_strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! assert_eq!(report.strength, Strength::Strong);
//! println!("Strength: {:?}", report.strength);
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use evaluator::evaluate_password_strength;
pub use sections::{
    LengthChecks, SPECIAL_CHARS, VarietyChecks, character_variety_section, length_section,
};
pub use types::{ColorClass, Strength, StrengthReport, StrengthScore};
