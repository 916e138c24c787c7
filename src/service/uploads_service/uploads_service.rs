use crate::{auth::User, dto::output, error::Error};
use axum::async_trait;

///
/// Stored payment proofs (bank slips, photos of receipts)
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadsService: Send + Sync {
    ///
    /// Stores file under generated name
    ///
    /// ### Returns
    /// path the file is served at
    ///
    /// ### Errors
    /// - [Error::UnsupportedUpload] when file is empty or not png, jpeg or pdf
    ///
    async fn save(&self, user: &User, content: Vec<u8>) -> Result<output::Upload, Error>;

    ///
    /// ### Returns
    /// content type and content of the file
    ///
    /// ### Errors
    /// - [Error::UploadNotExist] when name was not generated by [UploadsService::save]
    ///   or file does not exist
    ///
    async fn find(&self, user: &User, name: &str) -> Result<(&'static str, Vec<u8>), Error>;
}
