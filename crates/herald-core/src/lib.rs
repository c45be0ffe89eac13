//! # herald-core
//!
//! Core records, requirement bundles, and error types for Herald.
//!
//! This crate provides the plain data shared across all Herald crates:
//! - Validation records (errors, warnings, aggregate result)
//! - Content-integrity records produced when comparing two HTML documents
//! - Enhancement records describing an AI rewrite and the protection decision
//! - Requirement bundle structs loaded from a campaign folder
//! - Cross-cutting error types
//!
//! Nothing here has identity beyond a single call; every record is rebuilt
//! from the HTML string and the campaign JSON files on each invocation.

pub mod enhancement;
pub mod enums;
pub mod errors;
pub mod integrity;
pub mod requirements;
pub mod validation;

pub use enhancement::{EnhancementResult, EnhancementValidation, SizeAnalysis, Versions};
pub use enums::{ErrorType, PreferredVersion, Severity, WarningType};
pub use errors::CoreError;
pub use integrity::{IntegrityCheckResult, IntegrityDetails};
pub use requirements::RequirementsBundle;
pub use validation::{ValidationError, ValidationResult, ValidationWarning};
