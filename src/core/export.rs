use crate::domain::model::CountryRecord;
use crate::utils::error::{AtlasError, Result};

// Column order must match the CountryRecord field order so that serde and
// the empty-set path produce the same header.
const HEADER: [&str; 8] = [
    "name",
    "population",
    "area",
    "region",
    "subregion",
    "capital",
    "languages",
    "currencies",
];

/// Serializes the canonical record set as CSV: header row always present,
/// one row per record, input order preserved.
pub fn to_csv(records: &[CountryRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        writer.write_record(HEADER)?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| AtlasError::ProcessingError {
        message: format!("CSV writer flush failed: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| AtlasError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {e}"),
    })
}
