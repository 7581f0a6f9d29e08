//! Permission-scoped routing
//!
//! - [`registry`]: static module map and public routes
//! - [`guard`]: session gate for the protected area
//! - [`generator`]: session → route set

pub mod generator;
pub mod guard;
pub mod registry;

pub use generator::{RouteEntry, default_landing, generate};
pub use guard::{GuardDecision, RouteGuard};
pub use registry::{BASE_PATH, MODULE_MAP, ModuleEntry, PUBLIC_ROUTES, UNAUTHORIZED_PATH};
