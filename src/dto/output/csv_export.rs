///
/// CSV file sent as attachment
///
#[derive(Debug)]
pub struct CsvExport {
    pub filename: &'static str,
    pub content: Vec<u8>,
}
