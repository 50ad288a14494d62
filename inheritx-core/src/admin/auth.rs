//! Admin credential check.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::timer::Timer;
use crate::Result;

/// The persisted admin identity, stored as `{"email": ...}` under `adminAuth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Admin email address.
    pub email: String,
}

impl AdminProfile {
    /// Create a profile.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Verifies admin credentials.
///
/// Callers have already rejected empty fields. Implementations backed by a
/// real service should return `InheritxError::Validation` for bad credentials.
#[async_trait(?Send)]
pub trait AdminAuthenticator {
    /// Check `email`/`password` and return the authenticated profile.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AdminProfile>;
}

/// Placeholder authenticator: waits a fixed delay, then accepts anything.
pub struct DemoAuthenticator {
    timer: Rc<dyn Timer>,
    delay: Duration,
}

impl DemoAuthenticator {
    /// Create an authenticator that waits `delay` before accepting.
    pub fn new(timer: Rc<dyn Timer>, delay: Duration) -> Self {
        Self { timer, delay }
    }

    /// Create an authenticator using the configured login delay.
    pub fn from_config(timer: Rc<dyn Timer>, config: &AdminConfig) -> Self {
        Self::new(timer, config.login_delay())
    }

    /// The artificial delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait(?Send)]
impl AdminAuthenticator for DemoAuthenticator {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<AdminProfile> {
        tracing::warn!("demo authenticator accepts any credentials; no backend check performed");
        self.timer.sleep(self.delay).await;
        Ok(AdminProfile::new(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ImmediateTimer, TokioTimer};

    #[tokio::test]
    async fn test_accepts_any_pair() {
        let auth = DemoAuthenticator::new(Rc::new(ImmediateTimer), Duration::from_secs(5));
        let profile = auth.authenticate("root@inheritx.com", "hunter2").await.unwrap();
        assert_eq!(profile, AdminProfile::new("root@inheritx.com"));
    }

    #[tokio::test]
    async fn test_waits_configured_delay() {
        let config = AdminConfig::default().with_login_delay_ms(30);
        let auth = DemoAuthenticator::from_config(Rc::new(TokioTimer), &config);
        assert_eq!(auth.delay(), Duration::from_millis(30));

        let start = std::time::Instant::now();
        auth.authenticate("a@b.com", "pw").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_profile_wire_format() {
        let json = serde_json::to_string(&AdminProfile::new("a@b.com")).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
    }
}
