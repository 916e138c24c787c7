use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("provider rejected message: {0}")]
    Rejected(String),
}
