use crate::error::Error;
use anyhow::{anyhow, Context};
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

///
/// Writes rows with header taken from field names of `T`
///
pub fn write_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .context("failed to serialize csv row")?;
    }

    let content = writer
        .into_inner()
        .map_err(|err| anyhow!("failed to flush csv: {}", err.error()))?;

    Ok(content)
}

pub fn format_datetime(datetime: OffsetDateTime) -> String {
    datetime
        .format(&Rfc3339)
        .unwrap_or_else(|_| datetime.to_string())
}
