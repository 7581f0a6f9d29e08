//! DMS Console - fleet back-office console core
//!
//! The session, authorization, and routing engine behind the fleet
//! management console. Pages are interchangeable list/detail/form
//! templates; this crate decides who may enter, which pages are reachable,
//! and when a session stops being valid.
//!
//! # Module structure
//!
//! ```text
//! dms-console/src/
//! ├── config.rs    # environment-driven configuration
//! ├── error.rs     # error types
//! ├── logger.rs    # tracing setup
//! ├── session/     # record storage, clock, expiry watcher
//! ├── auth/        # backend client, permission resolver
//! ├── routing/     # module map, guard, route generation
//! ├── pages.rs     # page catalog and affordance gating
//! └── shell.rs     # navigator seam and shell orchestration
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod logger;
pub mod pages;
pub mod routing;
pub mod session;
pub mod shell;

// Re-export public types
pub use auth::{AuthBackend, AuthService, HttpAuthBackend, PermissionResolver};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use logger::{init_logger, init_logger_with_level};
pub use pages::{PageActions, PageComponent, gated_action};
pub use routing::{
    BASE_PATH, GuardDecision, MODULE_MAP, PUBLIC_ROUTES, RouteEntry, RouteGuard,
    UNAUTHORIZED_PATH, default_landing, generate,
};
pub use session::{
    Clock, ExpiryWatcher, FileSessionStore, ManualClock, MemorySessionStore, SessionStore,
    SystemClock, WatcherHandle,
};
pub use shell::{ConsoleShell, Navigator, Notice};

// Re-export the shared data model
pub use shared::{CapabilitySet, MenuGroup, Module, Role, SessionRecord, UserType};
