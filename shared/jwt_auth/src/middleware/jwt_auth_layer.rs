use super::JwtAuthService;
use crate::util::create_validation;
use jsonwebtoken::{DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey) -> Self {
        Self {
            validation: Arc::new(create_validation()),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}
