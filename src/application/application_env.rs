use anyhow::{anyhow, Context};
use jwt_auth::util::JwtKeys;
use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

const DEFAULT_MAX_FAILED_LOGIN_ATTEMPTS: u32 = 5;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// base URL of links sent to customers
    pub public_url: String,
    pub organization_name: String,
    pub upload_directory: PathBuf,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub jwt_keys: JwtKeys,
    pub session_inactivity_timeout: Duration,
    pub session_max_lifetime: Duration,
    pub session_gc_interval: Duration,
    pub max_failed_login_attempts: u32,

    /// created on startup when no user with this name exists
    pub superadmin: Option<SuperadminSeed>,

    pub afro_api_url: String,
    pub afro_api_key: String,
    pub afro_sender_name: String,
    pub afro_identifier_id: Option<String>,
    pub sms_timeout: Duration,
}

pub struct SuperadminSeed {
    pub username: String,
    pub password: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("RECEIPT_ROCKET_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("RECEIPT_ROCKET_LOG_FILENAME")?;
        let bind_address = Self::env_var("RECEIPT_ROCKET_BIND_ADDRESS")?.parse()?;
        let public_url = Self::env_var("RECEIPT_ROCKET_PUBLIC_URL")?;
        let organization_name = Self::env_var("RECEIPT_ROCKET_ORGANIZATION_NAME")?;
        let upload_directory = Self::env_var("RECEIPT_ROCKET_UPLOAD_DIRECTORY")?.into();
        let db_connection_string = Self::env_var("DATABASE_URL")?;
        let db_name = Self::env_var("RECEIPT_ROCKET_DB_NAME")?;
        let max_http_content_len = Self::parse_var("RECEIPT_ROCKET_MAX_HTTP_CONTENT_LEN")?;
        let jwt_secret = Self::env_var("NEXTAUTH_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(anyhow!("NEXTAUTH_SECRET must not be empty"));
        }
        let jwt_keys = JwtKeys::from_secret(jwt_secret.as_bytes());
        let session_inactivity_timeout =
            Self::parse_secs("RECEIPT_ROCKET_SESSION_INACTIVITY_TIMEOUT")?;
        let session_max_lifetime = Self::parse_secs("RECEIPT_ROCKET_SESSION_MAX_LIFETIME")?;
        let session_gc_interval = Self::parse_secs("RECEIPT_ROCKET_SESSION_GC_INTERVAL")?;
        if session_gc_interval.is_zero() {
            return Err(anyhow!("RECEIPT_ROCKET_SESSION_GC_INTERVAL must be greater than 0"));
        }
        let max_failed_login_attempts =
            match Self::optional_env_var("RECEIPT_ROCKET_MAX_FAILED_LOGIN_ATTEMPTS") {
                Some(value) => value
                    .parse()
                    .context("RECEIPT_ROCKET_MAX_FAILED_LOGIN_ATTEMPTS is not a number")?,
                None => DEFAULT_MAX_FAILED_LOGIN_ATTEMPTS,
            };
        let superadmin = match (
            Self::optional_env_var("RECEIPT_ROCKET_SUPERADMIN_USERNAME"),
            Self::optional_env_var("RECEIPT_ROCKET_SUPERADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(SuperadminSeed { username, password }),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "RECEIPT_ROCKET_SUPERADMIN_USERNAME and RECEIPT_ROCKET_SUPERADMIN_PASSWORD must be set together"
                ))
            }
        };
        let afro_api_url = Self::env_var("AFRO_API_URL")?;
        let afro_api_key = Self::env_var("AFRO_API_KEY")?;
        let afro_sender_name = Self::env_var("AFRO_SENDER_NAME")?;
        let afro_identifier_id = Self::optional_env_var("AFRO_IDENTIFIER_ID");
        let sms_timeout = Self::parse_secs("RECEIPT_ROCKET_SMS_TIMEOUT")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            public_url,
            organization_name,
            upload_directory,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_keys,
            session_inactivity_timeout,
            session_max_lifetime,
            session_gc_interval,
            max_failed_login_attempts,
            superadmin,
            afro_api_url,
            afro_api_key,
            afro_sender_name,
            afro_identifier_id,
            sms_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    ///
    /// Empty values are treated as not set
    ///
    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn parse_var<T>(name: &'static str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Self::env_var(name)?
            .parse()
            .with_context(|| format!("environment variable {name} is invalid"))
    }

    fn parse_secs(name: &'static str) -> anyhow::Result<Duration> {
        let secs = Self::parse_var::<u64>(name)?;

        Ok(Duration::from_secs(secs))
    }
}
