//! Session, user and role types

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

impl Role {
    /// Lower-case role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// An authenticated session.
///
/// Created by [`LoginFlow`](super::LoginFlow) and owned by the caller; ends
/// with [`Session::logout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a user, starting now.
    pub fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// When the session was opened.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Ends the session, handing back the user it belonged to.
    pub fn logout(self) -> User {
        log::info!("{} signed out", self.user.email);
        self.user
    }
}

/// Capability check: does the session carry `role`?
///
/// ```
/// use crm_lib::auth::{has_role, Role, Session, User};
///
/// let session = Session::new(User {
///     id: 1,
///     email: "admin@company.com".into(),
///     name: "Admin User".into(),
///     role: Role::Admin,
/// });
/// assert!(has_role(&session, Role::Admin));
/// assert!(!has_role(&session, Role::Agent));
/// ```
pub fn has_role(session: &Session, role: Role) -> bool {
    session.user.role == role
}
