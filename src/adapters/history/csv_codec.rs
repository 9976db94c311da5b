//! CSV encoding shared by the history store adapters.

use crate::domain::report::HistoryRecord;
use crate::ports::HistoryStoreError;

/// Encodes records as CSV, optionally preceded by the first record's header.
pub(crate) fn encode(
    records: &[HistoryRecord],
    include_header: bool,
) -> Result<Vec<u8>, HistoryStoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if include_header {
        if let Some(first) = records.first() {
            writer
                .write_record(first.column_names())
                .map_err(|e| HistoryStoreError::SerializationFailed(e.to_string()))?;
        }
    }
    for record in records {
        writer
            .write_record(record.values())
            .map_err(|e| HistoryStoreError::SerializationFailed(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| HistoryStoreError::SerializationFailed(e.to_string()))
}

/// Parses the header row of CSV content, `None` when there is no header.
pub(crate) fn decode_header(bytes: &[u8]) -> Result<Option<Vec<String>>, HistoryStoreError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| HistoryStoreError::IoError(e.to_string()))?;

    if headers.is_empty() {
        return Ok(None);
    }
    Ok(Some(headers.iter().map(String::from).collect()))
}

/// Parses CSV content with a header row into records, in file order.
pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| HistoryStoreError::IoError(e.to_string()))?
        .iter()
        .map(String::from)
        .collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index as u64 + 1;
        let row = row.map_err(|e| HistoryStoreError::IoError(format!("record {}: {}", line, e)))?;
        let values: Vec<&str> = row.iter().collect();
        let record = HistoryRecord::from_columns(&headers, &values)
            .map_err(|source| HistoryStoreError::CorruptRecord { line, source })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AverageScore, Timestamp};
    use crate::domain::report::build_history_record;
    use crate::domain::scoring::{DimensionScore, Score};

    fn record(user: &str, tenths: u16) -> HistoryRecord {
        let score = Score::from_average(AverageScore::from_tenths(tenths).unwrap());
        let dimensions = vec![
            DimensionScore::new("People", score),
            DimensionScore::new("Data", score),
        ];
        build_history_record(
            Timestamp::parse_history("2024-06-01 12:00:00").unwrap(),
            Some(user),
            &dimensions,
            &score,
        )
    }

    #[test]
    fn encode_writes_header_then_rows() {
        let bytes = encode(&[record("Ada", 30), record("Lin", 42)], true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Timestamp,User,People Score,Data Score,Overall Score");
        assert_eq!(lines[1], "2024-06-01 12:00:00,Ada,3.0,3.0,3.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn encode_quotes_user_with_comma() {
        let bytes = encode(&[record("Doe, Jane", 30)], false).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Doe, Jane\""));
    }

    #[test]
    fn decode_reads_encoded_rows_in_order() {
        let records = vec![record("Ada", 30), record("Doe, Jane", 42)];
        let bytes = encode(&records, true).unwrap();

        assert_eq!(decode(&bytes).unwrap(), records);
    }

    #[test]
    fn decode_of_nothing_is_empty() {
        assert!(decode(b"").unwrap().is_empty());
        assert_eq!(decode_header(b"").unwrap(), None);
    }

    #[test]
    fn decode_reports_corrupt_line() {
        let bytes = b"Timestamp,User,People Score,Overall Score\n\
                      2024-06-01 12:00:00,Ada,3.0,3.0\n\
                      yesterday,Lin,3.0,3.0\n";
        let result = decode(bytes);
        assert!(matches!(result, Err(HistoryStoreError::CorruptRecord { line: 2, .. })));
    }
}
