//! STAS locking script construction and parsing.
//!
//! [`stas_builder`] stamps owner and redemption hashes into the fixed
//! v2 template and appends the token data section. [`reader`] goes the
//! other way and classifies arbitrary locking scripts, extracting the
//! token fields when the script is a well-formed STAS v2 script.

pub mod reader;
pub mod stas_builder;
pub mod templates;

pub use reader::{is_stas, parse_stas, read_locking_script, ParsedScript, StasFields};
pub use stas_builder::{build_stas_locking_script, update_stas_owner};
