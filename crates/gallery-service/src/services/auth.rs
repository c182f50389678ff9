//! Authentication service
//!
//! Handles signup, login, logout, and resolution of the session user.
//! Login is an email lookup with no credential check.

use tracing::{info, instrument, warn};
use validator::Validate;

use gallery_core::{DomainError, IdKind, PaymentAccount, User, UserRole};

use crate::dto::{LogInRequest, SignUpRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Canonical form used for storing and comparing emails
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and make them the session user
    #[instrument(skip(self, request), fields(role = %request.role))]
    pub async fn sign_up(&self, mut request: SignUpRequest) -> ServiceResult<User> {
        request.email = normalize_email(&request.email);
        request.validate()?;

        // Role is fixed here; only artists carry a payout account.
        // Admin accounts are never self-registered.
        let payment_account = match (request.role, request.payment_account) {
            (UserRole::Admin, _) => {
                warn!("Refused self-registration as admin");
                return Err(DomainError::InvalidValue {
                    field: "role",
                    value: UserRole::Admin.to_string(),
                }
                .into());
            }
            (UserRole::Artist, Some(input)) => {
                Some(PaymentAccount::new(input.provider, input.identifier.trim()))
            }
            (UserRole::Artist, None) => return Err(DomainError::PaymentAccountRequired.into()),
            (UserRole::Buyer, _) => None,
        };

        let name = request.name.trim().to_string();
        let email = request.email;
        let role = request.role;

        let user = self.ctx.store().transact(|tx| {
            if tx.users().iter().any(|u| normalize_email(&u.email) == email) {
                return Err(DomainError::EmailAlreadyExists(email.clone()));
            }

            let id = self
                .ctx
                .generate_id(IdKind::User, |id| tx.users().iter().any(|u| &u.id == id));
            let mut user = User::new(id, name, email.clone(), role);
            user.payment_account = payment_account;

            tx.users_mut().push(user.clone());
            tx.set_session(Some(user.clone()));
            Ok(user)
        })?;

        info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Look a user up by email and make them the session user
    #[instrument(skip(self, request))]
    pub async fn log_in(&self, request: LogInRequest) -> ServiceResult<User> {
        let email = normalize_email(&request.email);
        LogInRequest {
            email: email.clone(),
        }
        .validate()?;

        let user = self.ctx.store().transact(|tx| {
            let user = tx
                .users()
                .iter()
                .find(|u| normalize_email(&u.email) == email)
                .cloned()
                .ok_or_else(|| {
                    warn!("Login failed: no user with that email");
                    DomainError::UserEmailNotFound(email.clone())
                })?;
            tx.set_session(Some(user.clone()));
            Ok(user)
        })?;

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Clear the session
    #[instrument(skip(self))]
    pub async fn log_out(&self) -> ServiceResult<()> {
        self.ctx.store().set_session(None)?;
        info!("User logged out");
        Ok(())
    }

    /// Resolve the session against the user collection.
    ///
    /// A session pointing at a user that no longer exists is cleared. When
    /// the user collection cannot be read, the caller is treated as signed
    /// out and the session is left in place.
    pub async fn current_user(&self) -> ServiceResult<Option<User>> {
        let Some(session) = self.ctx.store().read_all().session else {
            return Ok(None);
        };

        let users = match self.ctx.store().try_read_users() {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "User collection unreadable, treating session as signed out");
                return Ok(None);
            }
        };
        if let Some(user) = users.into_iter().find(|u| u.id == session.id) {
            return Ok(Some(user));
        }

        warn!(user_id = %session.id, "Session user no longer exists, clearing session");
        self.ctx.store().set_session(None)?;
        Ok(None)
    }

    /// Current user, or `NotAuthenticated`
    pub async fn require_user(&self) -> ServiceResult<User> {
        self.current_user()
            .await?
            .ok_or_else(|| DomainError::NotAuthenticated.into())
    }

    /// Current user if they hold the Admin role
    pub async fn require_admin(&self) -> ServiceResult<User> {
        let user = self.require_user().await?;
        if !user.is_admin() {
            warn!(user_id = %user.id, "Admin operation refused");
            return Err(DomainError::AdminRequired.into());
        }
        Ok(user)
    }
}
