//! Catalog repositories.
//!
//! Each module adds read methods to `HvacService` via `impl HvacService` blocks.

pub mod equipment;
pub mod manufacturer;
