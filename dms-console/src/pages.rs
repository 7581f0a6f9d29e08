//! Page components
//!
//! The console's pages are interchangeable list/detail/form templates
//! driven by the routing layer. The core never renders them; it decides
//! which are reachable and which affordances each may expose.

use std::fmt;

use shared::{CAP_ADD, CAP_DELETE, CAP_EDIT, CAP_VIEW, CapabilitySet, SessionRecord};

use crate::auth::PermissionResolver;
use crate::error::ConsoleResult;

/// Catalog of page components the router can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageComponent {
    // Unauthenticated entry pages
    Login,
    OtpVerify,
    Register,
    ForgetPassword,
    ResetPassword,

    // Protected pages
    Dashboard,
    DriverList,
    DriverForm,
    DriverDetails,
    VehicleList,
    VehicleForm,
    VehicleDetails,
    TripList,
    TripDetails,
    PaymentList,
    PaymentDetails,
    SupportList,
    SupportDetails,
    ReportList,
    SettingsForm,

    // Fallbacks
    NotFound,
    Unauthorized,
}

impl PageComponent {
    pub fn name(&self) -> &'static str {
        match self {
            PageComponent::Login => "Login",
            PageComponent::OtpVerify => "OtpVerify",
            PageComponent::Register => "Register",
            PageComponent::ForgetPassword => "ForgetPassword",
            PageComponent::ResetPassword => "ResetPassword",
            PageComponent::Dashboard => "Dashboard",
            PageComponent::DriverList => "DriverList",
            PageComponent::DriverForm => "DriverForm",
            PageComponent::DriverDetails => "DriverDetails",
            PageComponent::VehicleList => "VehicleList",
            PageComponent::VehicleForm => "VehicleForm",
            PageComponent::VehicleDetails => "VehicleDetails",
            PageComponent::TripList => "TripList",
            PageComponent::TripDetails => "TripDetails",
            PageComponent::PaymentList => "PaymentList",
            PageComponent::PaymentDetails => "PaymentDetails",
            PageComponent::SupportList => "SupportList",
            PageComponent::SupportDetails => "SupportDetails",
            PageComponent::ReportList => "ReportList",
            PageComponent::SettingsForm => "SettingsForm",
            PageComponent::NotFound => "NotFound",
            PageComponent::Unauthorized => "Unauthorized",
        }
    }
}

impl fmt::Display for PageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Affordances a resource page template may expose for one module.
///
/// Templates degrade when a capability is absent: no `view` hides the page
/// body outright, and missing `add`/`edit`/`delete` hide the matching
/// controls rather than rendering dead ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageActions {
    pub view: bool,
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

impl PageActions {
    pub fn from_caps(caps: &CapabilitySet) -> Self {
        Self {
            view: caps.contains(CAP_VIEW),
            add: caps.contains(CAP_ADD),
            edit: caps.contains(CAP_EDIT),
            delete: caps.contains(CAP_DELETE),
        }
    }

    /// Resolve the affordances for `module_key` under the given session.
    pub fn for_module(
        resolver: &PermissionResolver,
        session: &SessionRecord,
        module_key: &str,
    ) -> Self {
        Self::from_caps(&resolver.resolve(session, module_key))
    }

    pub fn view_only(&self) -> bool {
        self.view && !self.add && !self.edit && !self.delete
    }

    pub fn hidden(&self) -> bool {
        !self.view && !self.add && !self.edit && !self.delete
    }
}

/// Run `action` only when the session holds `capability` on `module_key`.
///
/// A failed check returns the denial error (naming module and capability)
/// without executing the action; callers surface it as a notice.
pub fn gated_action<T>(
    resolver: &PermissionResolver,
    session: &SessionRecord,
    module_key: &str,
    capability: &str,
    action: impl FnOnce() -> T,
) -> ConsoleResult<T> {
    resolver.check(session, module_key, capability)?;
    Ok(action())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MenuGroup, Module, Role, UserType};

    fn employee_with(permission: &str) -> SessionRecord {
        SessionRecord {
            token: "t1".to_string(),
            expiry_time: None,
            user_type: UserType::Employee,
            employee_role: vec![Role {
                child_menus: vec![MenuGroup {
                    modules: vec![Module {
                        module_url: "driver".to_string(),
                        permission: permission.to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn actions_degrade_to_view_only() {
        let resolver = PermissionResolver::new();
        let session = employee_with("view");
        let actions = PageActions::for_module(&resolver, &session, "driver");
        assert!(actions.view_only());
        assert!(!actions.hidden());
    }

    #[test]
    fn actions_hidden_without_any_capability() {
        let resolver = PermissionResolver::new();
        let session = employee_with("view");
        let actions = PageActions::for_module(&resolver, &session, "vehicle");
        assert!(actions.hidden());
    }

    #[test]
    fn gated_action_executes_only_when_granted() {
        let resolver = PermissionResolver::new();
        let session = employee_with("view,edit");

        let ran = gated_action(&resolver, &session, "driver", "edit", || 42).unwrap();
        assert_eq!(ran, 42);

        let mut executed = false;
        let denied = gated_action(&resolver, &session, "driver", "delete", || {
            executed = true;
        });
        assert!(denied.is_err());
        assert!(!executed);
    }
}
