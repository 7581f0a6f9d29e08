//! Session Record and the embedded role/menu/module graph
//!
//! The session record is the durable, client-held proof of authentication.
//! It is created wholesale from a successful login or OTP verification
//! payload and never mutated field-by-field; callers replace it entirely.
//!
//! Role/menu data is embedded at login time and never refreshed on its own.

use serde::{Deserialize, Deserializer, Serialize};

/// Account class carried by the session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Admin,
    Employee,
}

/// Persisted session record.
///
/// Wire shape (camelCase JSON):
///
/// ```json
/// {
///   "token": "...",
///   "expiryTime": 1764950400000,
///   "userType": "Employee",
///   "employeeRole": [{ "childMenus": [{ "modules": [...] }] }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque credential issued by the auth backend.
    pub token: String,
    /// Absolute expiry in epoch milliseconds. Absent means the record is
    /// never invalidated on time alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<i64>,
    pub user_type: UserType,
    /// Assigned role bundles. Only meaningful for Employee sessions.
    /// A missing or non-array value degrades to empty instead of failing
    /// the whole record.
    #[serde(
        default,
        deserialize_with = "lenient_roles",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub employee_role: Vec<Role>,
}

impl SessionRecord {
    /// A record is only proof of authentication while it carries a token.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether the record's expiry has passed at `now_ms` (epoch ms).
    /// Records without `expiry_time` never expire here.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.expiry_time, Some(t) if now_ms > t)
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}

/// One assignable permission bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub child_menus: Vec<MenuGroup>,
}

/// A navigation group inside a role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A feature area plus its granted capability string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Feature area key, e.g. "dashboard", "driver". Compared
    /// case-insensitively.
    #[serde(default)]
    pub module_url: String,
    /// Comma-separated capability tokens, e.g. "view,edit,add,delete".
    #[serde(default)]
    pub permission: String,
}

impl Module {
    /// Case-insensitive match against a module key.
    pub fn matches_key(&self, key: &str) -> bool {
        self.module_url.eq_ignore_ascii_case(key)
    }
}

/// Accept any JSON for `employeeRole`; anything that is not a role array
/// loads as empty. Keeps a malformed authorization graph from taking the
/// whole session record down with it.
fn lenient_roles<'de, D>(deserializer: D) -> Result<Vec<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
