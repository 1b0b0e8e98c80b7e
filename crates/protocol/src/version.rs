//! Versioning of the theme API contract.
//!
//! # Version History
//!
//! | Version | Changes |
//! |---------|---------|
//! | 1 | Initial contract: preview, save, current theme |
//!
//! # Breaking Changes (require API_VERSION bump)
//!
//! - Removing or renaming request/response fields
//! - Changing field types
//! - Changing the acceptance threshold
//!
//! # Non-Breaking Changes (safe without version bump)
//!
//! - Adding new optional fields with `#[serde(default)]`
//! - Adding new rejection variants

/// Current contract version, sent with every response.
pub const API_VERSION: u32 = 1;

