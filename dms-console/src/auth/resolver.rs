//! Permission resolution
//!
//! The single place that walks the session's role/menu/module graph. Every
//! page and route decision depends on this resolver instead of carrying its
//! own copy of the walk.

use shared::{CapabilitySet, SessionRecord};

use crate::error::{ConsoleError, ConsoleResult};

/// Derives the capability set granted to a session on one module.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionResolver;

impl PermissionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the capability set for `module_key`.
    ///
    /// Admin sessions get the universal set for every module, bypassing the
    /// graph entirely. Employee sessions are resolved by walking
    /// `employeeRole → childMenus → modules` with a case-insensitive key
    /// match; when the same key appears more than once, the last matching
    /// module wins outright and earlier grants for that key are discarded.
    /// Returns the empty set when nothing matches.
    pub fn resolve(&self, session: &SessionRecord, module_key: &str) -> CapabilitySet {
        if session.is_admin() {
            return CapabilitySet::universal();
        }

        let mut resolved = CapabilitySet::new();
        for role in &session.employee_role {
            for menu in &role.child_menus {
                for module in &menu.modules {
                    if module.matches_key(module_key) {
                        resolved = CapabilitySet::from_permission(&module.permission);
                    }
                }
            }
        }
        resolved
    }

    /// Capability gate for protected actions.
    ///
    /// An empty resolution means no capabilities. The error names the
    /// module and the missing capability; callers surface it to the user
    /// instead of failing silently.
    pub fn check(
        &self,
        session: &SessionRecord,
        module_key: &str,
        capability: &str,
    ) -> ConsoleResult<()> {
        if self.resolve(session, module_key).contains(capability) {
            return Ok(());
        }

        tracing::warn!(
            event = "permission_denied",
            module = module_key,
            required_capability = capability,
            "Capability check failed"
        );
        Err(ConsoleError::PermissionDenied {
            module: module_key.to_string(),
            capability: capability.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MenuGroup, Module, Role, UserType};

    fn module(url: &str, permission: &str) -> Module {
        Module {
            module_url: url.to_string(),
            permission: permission.to_string(),
        }
    }

    fn role_with(modules: Vec<Module>) -> Role {
        Role {
            child_menus: vec![MenuGroup { modules }],
        }
    }

    fn employee(roles: Vec<Role>) -> SessionRecord {
        SessionRecord {
            token: "t1".to_string(),
            expiry_time: None,
            user_type: UserType::Employee,
            employee_role: roles,
        }
    }

    #[test]
    fn admin_gets_universal_set_for_any_key() {
        let session = SessionRecord {
            token: "t1".to_string(),
            expiry_time: None,
            user_type: UserType::Admin,
            employee_role: vec![role_with(vec![module("driver", "view")])],
        };

        let resolver = PermissionResolver::new();
        assert_eq!(
            resolver.resolve(&session, "driver"),
            CapabilitySet::universal()
        );
        assert_eq!(
            resolver.resolve(&session, "never-declared"),
            CapabilitySet::universal()
        );
    }

    #[test]
    fn employee_module_resolves_exact_tokens() {
        let session = employee(vec![role_with(vec![module("driver", "view,edit")])]);
        let resolver = PermissionResolver::new();

        let caps = resolver.resolve(&session, "driver");
        assert_eq!(caps, CapabilitySet::from_permission("view,edit"));

        // Case-insensitive key match resolves identically
        assert_eq!(resolver.resolve(&session, "DRIVER"), caps);
    }

    #[test]
    fn last_matching_module_overwrites_earlier_grants() {
        // Two roles both grant "driver"; only the later one's tokens
        // survive. Overwrite, not union.
        let session = employee(vec![
            role_with(vec![module("driver", "view,add,delete")]),
            role_with(vec![module("driver", "view,edit")]),
        ]);
        let resolver = PermissionResolver::new();

        let caps = resolver.resolve(&session, "driver");
        assert_eq!(caps, CapabilitySet::from_permission("view,edit"));
        assert!(!caps.contains("add"));
        assert!(!caps.contains("delete"));
    }

    #[test]
    fn unmatched_key_resolves_empty() {
        let session = employee(vec![role_with(vec![module("driver", "view")])]);
        let resolver = PermissionResolver::new();
        assert!(resolver.resolve(&session, "vehicle").is_empty());
    }

    #[test]
    fn check_denies_with_module_and_capability() {
        let session = employee(vec![role_with(vec![module("driver", "view")])]);
        let resolver = PermissionResolver::new();

        assert!(resolver.check(&session, "driver", "view").is_ok());
        let err = resolver.check(&session, "driver", "delete").unwrap_err();
        match err {
            ConsoleError::PermissionDenied { module, capability } => {
                assert_eq!(module, "driver");
                assert_eq!(capability, "delete");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn permission_tokens_are_trimmed_and_lowercased() {
        let session = employee(vec![role_with(vec![module("driver", " View , EDIT ")])]);
        let resolver = PermissionResolver::new();
        let caps = resolver.resolve(&session, "driver");
        assert!(caps.contains("view"));
        assert!(caps.contains("edit"));
    }
}
