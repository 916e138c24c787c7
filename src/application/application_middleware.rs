use super::ApplicationEnv;
use jsonwebtoken::DecodingKey;
use jwt_auth::JwtAuthLayer;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    create_middleware_with(env.jwt_keys.decoding.clone(), env.max_http_content_len)
}

pub fn create_middleware_with(
    jwt_key: DecodingKey,
    max_http_content_len: usize,
) -> ApplicationMiddleware {
    let auth = JwtAuthLayer::new(jwt_key);

    let body_limit = RequestBodyLimitLayer::new(max_http_content_len);

    // headers stay out of logs, they carry bearer tokens
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(false))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    ApplicationMiddleware {
        auth,
        body_limit,
        trace,
    }
}
