use super::{UploadKind, UploadsService, UploadsServiceConfig};
use crate::{
    auth::{self, Role, User},
    dto::output,
    error::Error,
};
use anyhow::Context;
use axum::async_trait;
use std::io::ErrorKind;
use uuid::Uuid;

pub const UPLOADS_PATH: &str = "/uploads";

pub struct UploadsServiceImpl {
    config: UploadsServiceConfig,
}

impl UploadsServiceImpl {
    ///
    /// Creates upload directory when missing
    ///
    pub async fn new(config: UploadsServiceConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.upload_directory)
            .await
            .with_context(|| {
                format!(
                    "failed to create upload directory {}",
                    config.upload_directory.display()
                )
            })?;

        Ok(Self { config })
    }

    ///
    /// Accepts only names in form `<uuid>.<extension>`
    ///
    fn parse_name(name: &str) -> Option<UploadKind> {
        let (stem, extension) = name.split_once('.')?;
        Uuid::parse_str(stem).ok()?;

        UploadKind::from_extension(extension)
    }
}

#[async_trait]
impl UploadsService for UploadsServiceImpl {
    #[tracing::instrument(name = "Upload", skip_all, fields(user_id = %user.id))]
    async fn save(&self, user: &User, content: Vec<u8>) -> Result<output::Upload, Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let kind = UploadKind::detect(&content)
            .ok_or(Error::UnsupportedUpload("only png, jpeg and pdf files are accepted"))?;

        let name = format!("{}.{}", Uuid::new_v4(), kind.extension());
        let path = self.config.upload_directory.join(&name);
        tokio::fs::write(&path, &content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(%name, size = content.len(), "stored upload");

        Ok(output::Upload {
            path: format!("{UPLOADS_PATH}/{name}"),
        })
    }

    async fn find(&self, user: &User, name: &str) -> Result<(&'static str, Vec<u8>), Error> {
        auth::require_any_role(user, Role::STAFF)?;

        let kind = Self::parse_name(name).ok_or(Error::UploadNotExist)?;
        let path = self.config.upload_directory.join(name);

        match tokio::fs::read(&path).await {
            Ok(content) => Ok((kind.content_type(), content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::UploadNotExist),
            Err(err) => Err(anyhow::Error::new(err)
                .context(format!("failed to read {}", path.display()))
                .into()),
        }
    }
}
