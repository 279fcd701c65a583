//! Login stub error types

/// Errors that can occur during the two-step login flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email or password was left empty.
    #[error("please fill in all fields")]
    MissingCredentials,

    /// The one-time password was left empty.
    #[error("please enter OTP")]
    MissingOtp,
}
