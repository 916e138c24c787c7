///
/// File types accepted as payment proof
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Png,
    Jpeg,
    Pdf,
}

impl UploadKind {
    const ALL: [UploadKind; 3] = [UploadKind::Png, UploadKind::Jpeg, UploadKind::Pdf];

    ///
    /// Detects type from leading bytes, declared content type is not trusted
    ///
    pub fn detect(content: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| content.starts_with(kind.magic()))
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            UploadKind::Png => "png",
            UploadKind::Jpeg => "jpg",
            UploadKind::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            UploadKind::Png => "image/png",
            UploadKind::Jpeg => "image/jpeg",
            UploadKind::Pdf => "application/pdf",
        }
    }

    fn magic(self) -> &'static [u8] {
        match self {
            UploadKind::Png => b"\x89PNG\r\n\x1a\n",
            UploadKind::Jpeg => b"\xff\xd8\xff",
            UploadKind::Pdf => b"%PDF-",
        }
    }
}
