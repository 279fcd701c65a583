//! Session and login stub
//!
//! There is no ambient "current user": the caller owns a [`Session`] and
//! passes it by reference to whatever needs to gate on roles.

mod login;
mod session;

pub use login::LoginFlow;
pub use login::PendingOtp;
pub use login::DEFAULT_LOGIN_DELAY;
pub use session::has_role;
pub use session::Role;
pub use session::Session;
pub use session::User;
