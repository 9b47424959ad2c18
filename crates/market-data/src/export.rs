//! CSV export for quote series.

use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Render a quote series as an in-memory CSV document.
///
/// The timestamp is written first as an ordinary column (RFC 3339),
/// followed by the OHLCV fields. Absent optional fields become empty
/// cells. An empty series renders as the header row alone.
pub fn quotes_to_csv(quotes: &[Quote]) -> Result<String, MarketDataError> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(["timestamp", "open", "high", "low", "close", "volume"])
        .map_err(|e| MarketDataError::ExportFailed {
            message: e.to_string(),
        })?;

    for quote in quotes {
        writer
            .write_record([
                quote.timestamp.to_rfc3339(),
                decimal_field(quote.open),
                decimal_field(quote.high),
                decimal_field(quote.low),
                quote.close.to_string(),
                decimal_field(quote.volume),
            ])
            .map_err(|e| MarketDataError::ExportFailed {
                message: e.to_string(),
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MarketDataError::ExportFailed {
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| MarketDataError::ExportFailed {
        message: e.to_string(),
    })
}

fn decimal_field(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 23, 22, 54, 24).unwrap()
    }

    fn sample_quotes() -> Vec<Quote> {
        vec![
            Quote::ohlcv(
                sample_timestamp(),
                dec!(148.00),
                dec!(152.00),
                dec!(147.50),
                dec!(150.25),
                dec!(1000000),
            ),
            Quote::new(sample_timestamp() + chrono::Duration::minutes(1), dec!(150.30)),
        ]
    }

    #[test]
    fn test_header_row() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "timestamp,open,high,low,close,volume");
    }

    #[test]
    fn test_one_record_per_quote() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_timestamp_leads_each_record() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        for line in csv.lines().skip(1) {
            let first = line.split(',').next().unwrap();
            assert!(DateTime::parse_from_rfc3339(first).is_ok(), "bad timestamp: {}", first);
        }
    }

    #[test]
    fn test_full_record_values() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2025-07-23T22:54:24+00:00,148.00,152.00,147.50,150.25,1000000"
        );
    }

    #[test]
    fn test_absent_fields_are_empty_cells() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        let row = csv.lines().nth(2).unwrap();
        assert_eq!(row, "2025-07-23T22:55:24+00:00,,,,150.30,");
    }

    #[test]
    fn test_empty_series_is_header_only() {
        let csv = quotes_to_csv(&[]).unwrap();
        assert_eq!(csv, "timestamp,open,high,low,close,volume\n");
    }

    #[test]
    fn test_round_trip() {
        let csv = quotes_to_csv(&sample_quotes()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec![
                "timestamp", "open", "high", "low", "close", "volume"
            ])
        );
        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(4).unwrap().parse::<Decimal>().unwrap(), dec!(150.25));
        assert_eq!(records[1].get(1).unwrap(), "");
    }
}
