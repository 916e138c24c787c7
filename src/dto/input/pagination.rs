use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 0
    ///
    #[serde(default)]
    pub page_idx: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    50
}

impl Pagination {
    pub fn skip(&self) -> u64 {
        u64::from(self.page_idx) * u64::from(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_idx: 0,
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skip_whole_pages() {
        let pagination = Pagination {
            page_idx: 3,
            page_size: 20,
        };

        assert_eq!(pagination.skip(), 60);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let pagination = serde_json::from_str::<Pagination>("{}").unwrap();

        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.page_size, 50);
    }
}
