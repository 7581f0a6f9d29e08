//! Capability tokens and capability sets
//!
//! A capability is one permitted action token on a module. Tokens are
//! normalized to trimmed, lower-case form before any comparison.

use std::collections::BTreeSet;
use std::fmt;

pub const CAP_VIEW: &str = "view";
pub const CAP_ADD: &str = "add";
pub const CAP_EDIT: &str = "edit";
pub const CAP_DELETE: &str = "delete";

/// Universal capability list. Admin sessions hold all of these for every
/// module.
pub const ALL_CAPABILITIES: &[&str] = &[CAP_VIEW, CAP_ADD, CAP_EDIT, CAP_DELETE];

/// Normalized set of capability tokens granted on one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The universal set granted to Admin sessions.
    pub fn universal() -> Self {
        Self(ALL_CAPABILITIES.iter().map(|c| c.to_string()).collect())
    }

    /// Parse a comma-separated permission string. Tokens are trimmed and
    /// lower-cased; empty fragments are dropped.
    pub fn from_permission(permission: &str) -> Self {
        Self(
            permission
                .split(',')
                .map(|token| token.trim().to_ascii_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    /// Membership test, normalizing the needle the same way as parsing.
    pub fn contains(&self, capability: &str) -> bool {
        self.0.contains(&capability.trim().to_ascii_lowercase())
    }

    pub fn grants_view(&self) -> bool {
        self.contains(CAP_VIEW)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", token)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<String> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|token| token.trim().to_ascii_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_tokens() {
        let caps = CapabilitySet::from_permission(" View , EDIT ,,add");
        assert_eq!(caps.len(), 3);
        assert!(caps.contains("view"));
        assert!(caps.contains("Edit"));
        assert!(caps.contains(" ADD "));
        assert!(!caps.contains("delete"));
    }

    #[test]
    fn universal_set_holds_all_tokens() {
        let caps = CapabilitySet::universal();
        for token in ALL_CAPABILITIES {
            assert!(caps.contains(token));
        }
    }

    #[test]
    fn empty_permission_string_is_empty_set() {
        assert!(CapabilitySet::from_permission("").is_empty());
        assert!(CapabilitySet::from_permission(" , ,").is_empty());
    }

    #[test]
    fn display_is_sorted_and_comma_joined() {
        let caps = CapabilitySet::from_permission("view,edit");
        assert_eq!(caps.to_string(), "edit,view");
    }
}
