//! Catalog entities as read from storage.
//!
//! Both map to tables owned by the storage collaborator and are read-only
//! to this workspace.

mod equipment;
mod manufacturer;

pub use equipment::{Equipment, Features};
pub use manufacturer::Manufacturer;
