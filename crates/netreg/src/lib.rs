//! Validate, format and browse blockchain networks registries.
//!
//! # Crate Structure
//!
//! - [`schema`]: Registry model, shape validation and JSON conversion
//! - [`filter`]: Search, testnet and service filtering with stable ordering

/// Re-export schema types.
pub mod schema {
    pub use netreg_schema::*;
}

/// Re-export filter types.
pub mod filter {
    pub use netreg_filter::*;
}
