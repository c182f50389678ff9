//! User service
//!
//! Handles profile updates for the session user.

use tracing::{info, instrument};
use validator::Validate;

use gallery_core::{DomainError, PaymentAccount, User};

use crate::dto::UpdateProfileRequest;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace name, bio, and (when given) payment account of the current user.
    ///
    /// The session copy is refreshed in the same commit. An existing payment
    /// account keeps its original connection time. Historical artwork and
    /// order snapshots keep the old name.
    #[instrument(skip(self, request))]
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> ServiceResult<User> {
        request.validate()?;
        let current = AuthService::new(self.ctx).require_user().await?;

        let updated = self.ctx.store().transact(|tx| {
            let user = tx
                .users_mut()
                .iter_mut()
                .find(|u| u.id == current.id)
                .ok_or_else(|| DomainError::UserNotFound(current.id.clone()))?;

            user.name = request.name.trim().to_string();
            user.bio = request
                .bio
                .map(|bio| bio.trim().to_string())
                .filter(|bio| !bio.is_empty());

            if let Some(input) = request.payment_account {
                let mut account = PaymentAccount::new(input.provider, input.identifier.trim());
                if let Some(previous) = &user.payment_account {
                    account.connected_at = previous.connected_at;
                }
                user.payment_account = Some(account);
            }

            let user = user.clone();
            if tx.session().is_some_and(|s| s.id == user.id) {
                tx.set_session(Some(user.clone()));
            }
            Ok(user)
        })?;

        info!(user_id = %updated.id, "Profile updated");
        Ok(updated)
    }
}
