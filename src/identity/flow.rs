//! Email one-time-password login.
//!
//! Two steps: [`start_email_login`] looks the address up and emails a
//! password for either login or registration; [`complete_email_login`] submits
//! the password to the matching endpoint.

use serde::{Deserialize, Serialize};

use super::OtpAction;
use crate::error::IdentityError;
use crate::traits::IdentityProvider;

/// A login waiting for the emailed password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    /// Address the password was sent to.
    pub email: String,
    /// Whether the password logs in or registers.
    pub action: OtpAction,
}

impl PendingLogin {
    /// True when completing will create a new account.
    #[must_use]
    pub fn is_registration(&self) -> bool {
        self.action == OtpAction::Register
    }
}

/// Look up `email` and send it a one-time password.
///
/// # Errors
///
/// Returns [`IdentityError`] if the lookup or the send fails.
pub async fn start_email_login(
    identity: &impl IdentityProvider,
    email: &str,
) -> Result<PendingLogin, IdentityError> {
    let email = email.trim();
    let action = if identity.check_user_exists(email).await? {
        OtpAction::Login
    } else {
        OtpAction::Register
    };

    identity.send_otp(email, action).await?;
    tracing::info!(action = %action, "One-time password sent");

    Ok(PendingLogin {
        email: email.to_string(),
        action,
    })
}

/// Submit the emailed password for `pending`.
///
/// # Errors
///
/// Returns [`IdentityError::Rejected`] if the password is not accepted.
pub async fn complete_email_login(
    identity: &impl IdentityProvider,
    pending: &PendingLogin,
    otp: &str,
) -> Result<(), IdentityError> {
    let otp = otp.trim();
    match pending.action {
        OtpAction::Login => identity.verify_otp(&pending.email, otp).await,
        OtpAction::Register => identity.register_with_otp(&pending.email, otp).await,
    }
}
