use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Upload {
    pub path: String,
}
