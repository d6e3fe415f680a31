use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{
    dto::{LoginRequest, SignupRequest},
    errors::AuthError,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::UserStore,
    repo_types::{NewUser, User},
};

/// Result of a successful login.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Signup and login on top of a [`UserStore`].
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserStore>,
    keys: JwtKeys,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserStore>, keys: JwtKeys) -> Self {
        Self { users, keys }
    }

    pub async fn signup(&self, req: SignupRequest) -> Result<User, AuthError> {
        require_non_empty("email", &req.email)?;
        require_non_empty("name", &req.name)?;
        require_non_empty("password", &req.password)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            warn!(email = %req.email, "email already registered");
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = hash_password(&req.password)?;
        let new_user = NewUser {
            id: Uuid::new_v4(),
            email: req.email,
            name: req.name,
            password_hash,
        };

        // A concurrent signup may commit between the check above and this insert;
        // the store reports that as a conflict, which converts to DuplicateUser.
        let user = self.users.insert(new_user).await.map_err(|e| {
            let err = AuthError::from(e);
            if matches!(err, AuthError::DuplicateUser) {
                warn!("email registered concurrently");
            }
            err
        })?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user)
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome, AuthError> {
        let Some(user) = self.users.find_by_email(&req.email).await? else {
            warn!(email = %req.email, "login unknown email");
            return Err(AuthError::UnknownUser);
        };

        if !verify_password(&req.password, &user.password_hash)? {
            warn!(user_id = %user.id, "login invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.keys.sign(user.id)?;
        info!(user_id = %user.id, "user logged in");
        Ok(LoginOutcome { token, user })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
