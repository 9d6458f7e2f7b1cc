//! # hvac-core
//!
//! Core types shared by the HVAC sizing and catalog crates.
//!
//! - Catalog entities (`Equipment`, `Manufacturer`) as read from storage
//! - Questionnaire input (`ScreeningAnswers`) and sizing output (`LoadCalculationResult`)
//! - Catalog filter criteria with explicit field presence
//! - Named estimation constants (`EstimationParams`)
//! - The static screening questionnaire definition
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod estimation;
pub mod filter;
pub mod questionnaire;
pub mod screening;
