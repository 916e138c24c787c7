use super::JwtAuthFuture;
use crate::{Claims, User};
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue},
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

#[derive(Debug, thiserror::Error)]
enum AuthorizationHeaderError {
    #[error("missing Authorization header")]
    Missing,

    #[error("illegal character in Authorization header")]
    IllegalCharacter,

    #[error("unsupported authorization type")]
    UnsupportedType,

    #[error("invalid jwt: {0}")]
    InvalidJwt(#[from] jsonwebtoken::errors::Error),
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, validation: Arc<Validation>, key: Arc<DecodingKey>) -> Self {
        Self {
            inner,
            validation,
            key,
        }
    }

    fn parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> Result<User, AuthorizationHeaderError> {
        let authorization_header = authorization_header.ok_or(AuthorizationHeaderError::Missing)?;
        let authorization_value = authorization_header
            .to_str()
            .map_err(|_| AuthorizationHeaderError::IllegalCharacter)?;
        let token = authorization_value
            .strip_prefix("Bearer ")
            .ok_or(AuthorizationHeaderError::UnsupportedType)?;
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(User::from(token_data.claims))
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let authorization_header = req.headers().get(AUTHORIZATION);

        match self.parse_authorization_header(authorization_header) {
            Ok(user) => {
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                JwtAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "auth error");
                JwtAuthFuture::Unauthorized
            }
        }
    }
}
