use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UploadsServiceConfig {
    pub upload_directory: PathBuf,
}
