//! Static application module map
//!
//! Declares every feature area the console ships, the capability → page
//! bindings inside each, and the unauthenticated entry routes. The dynamic
//! route generator intersects this map with the session's resolved
//! permissions.

use shared::{CAP_ADD, CAP_EDIT, CAP_VIEW};

use crate::pages::PageComponent;

/// Base path of the protected area. Doubles as the login entry point:
/// unauthenticated redirects land here.
pub const BASE_PATH: &str = "/dms";

/// Landing path for sessions whose resolved set grants no viewable module.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Module key every Admin session lands on.
pub const DEFAULT_LANDING_MODULE: &str = "dashboard";

/// One declared feature area.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    /// Canonical (lower-case) module key; session `moduleUrl` values are
    /// matched against it case-insensitively.
    pub key: &'static str,
    /// Capability token → page component mounted for it. `view` mounts at
    /// `/<base>/<key>`, every other capability at `/<base>/<key>/<cap>`.
    pub pages: &'static [(&'static str, PageComponent)],
    /// Details sub-component mounted at `/<base>/<key>/view/:id` when the
    /// module is viewable.
    pub view_details: Option<PageComponent>,
}

/// Declared modules, in navigation order.
pub const MODULE_MAP: &[ModuleEntry] = &[
    ModuleEntry {
        key: "dashboard",
        pages: &[(CAP_VIEW, PageComponent::Dashboard)],
        view_details: None,
    },
    ModuleEntry {
        key: "driver",
        pages: &[
            (CAP_VIEW, PageComponent::DriverList),
            (CAP_ADD, PageComponent::DriverForm),
            (CAP_EDIT, PageComponent::DriverForm),
        ],
        view_details: Some(PageComponent::DriverDetails),
    },
    ModuleEntry {
        key: "vehicle",
        pages: &[
            (CAP_VIEW, PageComponent::VehicleList),
            (CAP_ADD, PageComponent::VehicleForm),
            (CAP_EDIT, PageComponent::VehicleForm),
        ],
        view_details: Some(PageComponent::VehicleDetails),
    },
    ModuleEntry {
        key: "trip",
        pages: &[(CAP_VIEW, PageComponent::TripList)],
        view_details: Some(PageComponent::TripDetails),
    },
    ModuleEntry {
        key: "payment",
        pages: &[(CAP_VIEW, PageComponent::PaymentList)],
        view_details: Some(PageComponent::PaymentDetails),
    },
    ModuleEntry {
        key: "support",
        pages: &[
            (CAP_VIEW, PageComponent::SupportList),
            (CAP_EDIT, PageComponent::SupportDetails),
        ],
        view_details: Some(PageComponent::SupportDetails),
    },
    ModuleEntry {
        key: "report",
        pages: &[(CAP_VIEW, PageComponent::ReportList)],
        view_details: None,
    },
    ModuleEntry {
        key: "settings",
        pages: &[
            (CAP_VIEW, PageComponent::SettingsForm),
            (CAP_EDIT, PageComponent::SettingsForm),
        ],
        view_details: None,
    },
];

/// Look up a declared module by key, case-insensitively.
pub fn find_module(key: &str) -> Option<&'static ModuleEntry> {
    MODULE_MAP
        .iter()
        .find(|entry| entry.key.eq_ignore_ascii_case(key))
}

/// Unauthenticated routes living outside the guard.
pub const PUBLIC_ROUTES: &[(&str, PageComponent)] = &[
    ("/login", PageComponent::Login),
    ("/otp", PageComponent::OtpVerify),
    ("/register", PageComponent::Register),
    ("/forget-password", PageComponent::ForgetPassword),
    ("/reset-password", PageComponent::ResetPassword),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_lookup_is_case_insensitive() {
        assert!(find_module("driver").is_some());
        assert!(find_module("DRIVER").is_some());
        assert!(find_module("Driver").is_some());
        assert!(find_module("missing").is_none());
    }

    #[test]
    fn map_keys_are_canonical_lowercase() {
        for entry in MODULE_MAP {
            assert_eq!(entry.key, entry.key.to_ascii_lowercase());
        }
    }

    #[test]
    fn every_module_declares_a_view_page() {
        for entry in MODULE_MAP {
            assert!(
                entry.pages.iter().any(|(cap, _)| *cap == CAP_VIEW),
                "module '{}' has no view page",
                entry.key
            );
        }
    }
}
