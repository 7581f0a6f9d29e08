// dms-console/tests/common/mod.rs
// Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use dms_console::{MenuGroup, Module, Navigator, Notice, Role, SessionRecord, UserType};
use parking_lot::Mutex;

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub replace: bool,
}

/// Navigator that records everything the core emits.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<Redirect>>,
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects.lock().clone()
    }

    pub fn last_redirect(&self) -> Option<Redirect> {
        self.redirects.lock().last().cloned()
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.lock().len()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.lock().len()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str, replace: bool) {
        self.redirects.lock().push(Redirect {
            path: path.to_string(),
            replace,
        });
    }

    fn notice(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

pub fn admin_record(token: &str, expiry_time: Option<i64>) -> SessionRecord {
    SessionRecord {
        token: token.to_string(),
        expiry_time,
        user_type: UserType::Admin,
        employee_role: vec![],
    }
}

pub fn employee_record(token: &str, modules: Vec<(&str, &str)>) -> SessionRecord {
    SessionRecord {
        token: token.to_string(),
        expiry_time: None,
        user_type: UserType::Employee,
        employee_role: vec![Role {
            child_menus: vec![MenuGroup {
                modules: modules
                    .into_iter()
                    .map(|(url, permission)| Module {
                        module_url: url.to_string(),
                        permission: permission.to_string(),
                    })
                    .collect(),
            }],
        }],
    }
}
