//! Console core walkthrough
//!
//! Wires the shell against an in-memory store and a stub auth backend,
//! then prints the route table each session can reach.
//!
//! Run with: cargo run --example console_demo

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dms_console::{
    AuthBackend, AuthService, ConsoleConfig, ConsoleResult, ConsoleShell, ManualClock,
    MemorySessionStore, Navigator, Notice, PageActions, PermissionResolver, SessionRecord,
    SessionStore,
};
use shared::client::{
    LoginRequest, NewPasswordRequest, OtpVerifyRequest, PasswordResetRequest, RegisterRequest,
};
use shared::{MenuGroup, Module, Role, UserType};

/// Navigator that prints what the core asks the UI shell to do.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn redirect(&self, path: &str, replace: bool) {
        println!("  -> redirect to {path} (replace: {replace})");
    }

    fn notice(&self, notice: Notice) {
        println!("  !! {}", notice.message());
    }
}

/// Stub backend issuing a fixed employee session.
struct DemoBackend;

#[async_trait]
impl AuthBackend for DemoBackend {
    async fn login(&self, req: &LoginRequest) -> ConsoleResult<SessionRecord> {
        println!("  backend login for '{}'", req.username);
        Ok(SessionRecord {
            token: "demo-token".to_string(),
            expiry_time: Some(chrono::Utc::now().timestamp_millis() + 60_000),
            user_type: UserType::Employee,
            employee_role: vec![Role {
                child_menus: vec![MenuGroup {
                    modules: vec![
                        Module {
                            module_url: "dashboard".to_string(),
                            permission: "view".to_string(),
                        },
                        Module {
                            module_url: "driver".to_string(),
                            permission: "view,edit".to_string(),
                        },
                    ],
                }],
            }],
        })
    }

    async fn verify_otp(&self, _req: &OtpVerifyRequest) -> ConsoleResult<SessionRecord> {
        self.login(&LoginRequest {
            username: "otp-user".to_string(),
            password: String::new(),
        })
        .await
    }

    async fn register(&self, _req: &RegisterRequest) -> ConsoleResult<()> {
        Ok(())
    }

    async fn request_password_reset(&self, _req: &PasswordResetRequest) -> ConsoleResult<()> {
        Ok(())
    }

    async fn reset_password(&self, _req: &NewPasswordRequest) -> ConsoleResult<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dms_console::init_logger();

    let store = Arc::new(MemorySessionStore::new());
    let clock = Arc::new(ManualClock::new(chrono::Utc::now().timestamp_millis()));
    let navigator = Arc::new(PrintNavigator);

    let config = ConsoleConfig::new("http://localhost:8080", "/tmp/dms-demo")
        .with_watcher_interval(Duration::from_millis(50));

    println!("== login ==");
    let auth = AuthService::new(Arc::new(DemoBackend), store.clone());
    let record = auth
        .login(&LoginRequest {
            username: "dispatch".to_string(),
            password: "secret".to_string(),
        })
        .await?;

    println!("== enter protected area ==");
    let mut shell = ConsoleShell::new(config, store.clone(), clock.clone(), navigator);
    let routes = shell.enter().expect("fresh session should enter");
    println!("  landing: {}", shell.landing().unwrap_or_default());
    for route in &routes {
        println!("  {:40} {}", route.path, route.component);
    }

    println!("== page affordances ==");
    let resolver = PermissionResolver::new();
    let actions = PageActions::for_module(&resolver, &record, "driver");
    println!("  driver: {:?} (view-only: {})", actions, actions.view_only());

    // A delete attempt is denied with a user-facing message
    if let Err(err) = dms_console::gated_action(&resolver, &record, "driver", "delete", || ())
        && let Some(notice) = Notice::from_error(&err)
    {
        println!("  {}", notice.message());
    }

    println!("== expiry ==");
    clock.advance(120_000);
    tokio::time::sleep(Duration::from_millis(200)).await;
    println!("  store after expiry: {:?}", store.load());

    shell.teardown().await;
    Ok(())
}
