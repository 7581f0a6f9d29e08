//! Dynamic route generation
//!
//! Pure function from a session to the ordered set of navigable routes.
//! Nothing here touches storage or the UI; the guard decides whether to
//! call it, and the shell mounts what it returns.

use shared::{CAP_VIEW, CapabilitySet, SessionRecord, UserType};

use crate::auth::PermissionResolver;
use crate::pages::PageComponent;

use super::registry::{
    self, BASE_PATH, DEFAULT_LANDING_MODULE, MODULE_MAP, ModuleEntry, UNAUTHORIZED_PATH,
};

/// A navigable path bound to a page component, gated by capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub component: PageComponent,
    /// Module key the entry belongs to; `None` for the catch-all.
    pub module: Option<&'static str>,
    /// Capability that unlocked the entry; `None` for the catch-all.
    pub capability: Option<&'static str>,
}

impl RouteEntry {
    fn catch_all() -> Self {
        Self {
            path: "*".to_string(),
            component: PageComponent::NotFound,
            module: None,
            capability: None,
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.path == "*"
    }
}

/// Compute the navigable route set for a session.
///
/// Admin sessions get every declared module-capability pair. Employee
/// sessions get entries only for modules reachable through their role
/// graph whose resolution is non-empty, with each module emitted once even
/// when it appears under several roles. The final entry is always the
/// catch-all rendering the not-found page; it matches anything and must
/// stay last.
pub fn generate(session: &SessionRecord) -> Vec<RouteEntry> {
    let mut routes = Vec::new();

    match session.user_type {
        UserType::Admin => {
            for entry in MODULE_MAP {
                push_module_routes(&mut routes, entry, None);
            }
        }
        UserType::Employee => {
            let resolver = PermissionResolver::new();
            let mut seen: Vec<&'static str> = Vec::new();
            for role in &session.employee_role {
                for menu in &role.child_menus {
                    for module in &menu.modules {
                        let Some(entry) = registry::find_module(&module.module_url) else {
                            continue;
                        };
                        if seen.contains(&entry.key) {
                            continue;
                        }
                        let caps = resolver.resolve(session, entry.key);
                        if caps.is_empty() {
                            continue;
                        }
                        seen.push(entry.key);
                        push_module_routes(&mut routes, entry, Some(&caps));
                    }
                }
            }
        }
    }

    routes.push(RouteEntry::catch_all());
    routes
}

/// Emit the route entries for one module. `granted` restricts the declared
/// pairs to the session's resolved capabilities; `None` emits all of them.
fn push_module_routes(
    routes: &mut Vec<RouteEntry>,
    entry: &'static ModuleEntry,
    granted: Option<&CapabilitySet>,
) {
    for &(capability, component) in entry.pages {
        if let Some(caps) = granted
            && !caps.contains(capability)
        {
            continue;
        }
        let path = if capability == CAP_VIEW {
            format!("{}/{}", BASE_PATH, entry.key)
        } else {
            format!("{}/{}/{}", BASE_PATH, entry.key, capability)
        };
        routes.push(RouteEntry {
            path,
            component,
            module: Some(entry.key),
            capability: Some(capability),
        });
    }

    if let Some(details) = entry.view_details {
        let viewable = granted.map(CapabilitySet::grants_view).unwrap_or(true);
        if viewable {
            routes.push(RouteEntry {
                path: format!("{}/{}/view/:id", BASE_PATH, entry.key),
                component: details,
                module: Some(entry.key),
                capability: Some(CAP_VIEW),
            });
        }
    }
}

/// Landing target for the base path.
///
/// Admin lands on the dashboard. Employee lands on the first module in the
/// role graph that is declared, has a usable key, and resolves with `view`;
/// a session with nothing viewable lands on the unauthorized page.
pub fn default_landing(session: &SessionRecord) -> String {
    if session.is_admin() {
        return format!("{}/{}", BASE_PATH, DEFAULT_LANDING_MODULE);
    }

    let resolver = PermissionResolver::new();
    for role in &session.employee_role {
        for menu in &role.child_menus {
            for module in &menu.modules {
                let Some(entry) = registry::find_module(&module.module_url) else {
                    continue;
                };
                if resolver.resolve(session, entry.key).grants_view() {
                    return format!("{}/{}", BASE_PATH, entry.key);
                }
            }
        }
    }

    UNAUTHORIZED_PATH.to_string()
}
