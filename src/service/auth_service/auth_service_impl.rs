use super::{AuthService, AuthServiceConfig};
use crate::{
    auth::{verify_password, User},
    dto::{input, output},
    error::Error,
    repository::{self, UsersRepository},
    service::sessions_service::SessionsService,
};
use anyhow::Context;
use axum::async_trait;
use jwt_auth::{util::encode_jwt, Claims};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct AuthServiceImpl {
    config: AuthServiceConfig,
    users_repository: Arc<dyn UsersRepository>,
    sessions_service: Arc<dyn SessionsService>,
}

impl AuthServiceImpl {
    pub fn new(
        config: AuthServiceConfig,
        users_repository: Arc<dyn UsersRepository>,
        sessions_service: Arc<dyn SessionsService>,
    ) -> Self {
        Self {
            config,
            users_repository,
            sessions_service,
        }
    }

    async fn record_failed_login(&self, user: &repository::User) -> Result<Error, Error> {
        let user = self
            .users_repository
            .record_failed_login(user.id, self.config.max_failed_login_attempts)
            .await?;

        tracing::warn!(
            failed_login_attempts = user.failed_login_attempts,
            is_locked = user.is_locked,
            "wrong password"
        );

        match user.is_locked {
            true => Ok(Error::AccountLocked),
            false => Ok(Error::InvalidCredentials),
        }
    }

    fn create_token(&self, user: &repository::User, session_id: Uuid) -> Result<String, Error> {
        let expire_at = OffsetDateTime::now_utc() + self.config.token_lifetime;
        let claims = Claims {
            sub: user.id,
            exp: expire_at.unix_timestamp(),
            sid: session_id,
            roles: vec![user.role.as_ref().to_string()],
            branch: user.branch.clone(),
        };

        let token = encode_jwt(&claims, &self.config.jwt_encoding_key)
            .context("failed to encode jwt")?;

        Ok(token)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[tracing::instrument(name = "Login", skip_all, fields(username = %login.username))]
    async fn login(&self, login: input::Login) -> Result<output::LoginResponse, Error> {
        tracing::info!("logging in");

        let user = self
            .users_repository
            .find_by_username(&login.username)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !user.is_active {
            return Err(Error::Forbidden("account is deactivated"));
        }
        if user.is_locked {
            return Err(Error::AccountLocked);
        }

        if !verify_password(&login.password, &user.password_hash) {
            return Err(self.record_failed_login(&user).await?);
        }

        let logged_in_at = OffsetDateTime::now_utc();
        self.users_repository
            .record_successful_login(user.id, logged_in_at)
            .await?;

        let session_id = self.sessions_service.create(user.id).await;
        let token = self.create_token(&user, session_id)?;

        tracing::info!(user_id = %user.id, %session_id, "logged in");

        let user = repository::User {
            failed_login_attempts: 0,
            last_login_at: Some(logged_in_at),
            ..user
        };

        Ok(output::LoginResponse {
            token,
            user: user.into(),
        })
    }

    async fn logout(&self, user: &User) {
        self.sessions_service.remove(user.session_id).await;
        tracing::info!(user_id = %user.id, "logged out");
    }

    async fn me(&self, user: &User) -> Result<output::User, Error> {
        let user = self
            .users_repository
            .find(user.id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(user.into())
    }
}
