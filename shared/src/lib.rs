//! Shared types for the DMS fleet console
//!
//! Common types used across the console crates: the persisted session
//! record, the role/menu/module permission graph, capability sets, and the
//! auth backend payloads.

pub mod capability;
pub mod client;
pub mod session;

// Re-exports
pub use capability::{ALL_CAPABILITIES, CAP_ADD, CAP_DELETE, CAP_EDIT, CAP_VIEW, CapabilitySet};
pub use client::{ApiResponse, LoginRequest, OtpVerifyRequest};
pub use serde::{Deserialize, Serialize};
pub use session::{MenuGroup, Module, Role, SessionRecord, UserType};
