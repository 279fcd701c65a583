//! Two-step login stub: credentials, then a one-time password.
//!
//! Nothing is verified. Any non-empty credentials yield an OTP challenge
//! and any non-empty OTP completes the login; the role is inferred from
//! the email address.

use std::time::Duration;

use log::debug;
use log::info;

use super::Role;
use super::Session;
use super::User;
use crate::error::AuthError;

/// Simulated round-trip latency of each login step.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_secs(1);

// =============================================================================
// LoginFlow
// =============================================================================

/// Login flow with simulated network latency.
///
/// # Example
///
/// ```ignore
/// use crm_lib::auth::LoginFlow;
///
/// let flow = LoginFlow::new();
/// let pending = flow.submit_credentials("admin@company.com", "secret").await?;
/// let session = pending.verify("123456").await?;
/// ```
#[derive(Debug, Clone)]
pub struct LoginFlow {
    delay: Duration,
}

impl LoginFlow {
    /// Creates a flow with the default latency.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_LOGIN_DELAY,
        }
    }

    /// Creates a flow with a custom latency (zero in tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Step one: submit email and password.
    ///
    /// Both must be non-empty; the email is kept as typed. On success an
    /// OTP is considered "sent".
    pub async fn submit_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PendingOtp, AuthError> {
        simulate_latency(self.delay).await;

        if email.is_empty() || password.is_empty() {
            debug!("credentials rejected: missing field");
            return Err(AuthError::MissingCredentials);
        }

        info!("OTP sent for {}", email);
        Ok(PendingOtp {
            email: email.to_string(),
            delay: self.delay,
        })
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PendingOtp
// =============================================================================

/// A login waiting for its one-time password.
#[derive(Debug, Clone)]
pub struct PendingOtp {
    email: String,
    delay: Duration,
}

impl PendingOtp {
    /// The account the OTP was sent for.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Step two: submit the OTP and open a session.
    ///
    /// On failure the challenge stays usable for another attempt.
    pub async fn verify(&self, otp: &str) -> Result<Session, AuthError> {
        simulate_latency(self.delay).await;

        if otp.is_empty() {
            debug!("OTP rejected for {}: empty", self.email);
            return Err(AuthError::MissingOtp);
        }

        let user = user_for_email(&self.email);
        info!("{} signed in as {}", user.email, user.role);
        Ok(Session::new(user))
    }
}

/// Stub identity: emails containing "admin" get the admin role.
fn user_for_email(email: &str) -> User {
    let is_admin = email.contains("admin");
    User {
        id: 1,
        email: email.to_string(),
        name: if is_admin { "Admin User" } else { "Agent User" }.to_string(),
        role: if is_admin { Role::Admin } else { Role::Agent },
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_email() {
        assert_eq!(user_for_email("admin@company.com").role, Role::Admin);
        assert_eq!(user_for_email("jane@company.com").role, Role::Agent);
        assert_eq!(user_for_email("jane@company.com").name, "Agent User");
    }
}
