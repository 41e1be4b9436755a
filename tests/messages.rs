#[cfg(test)]
mod tests {
    use tapstamp::libs::formatter::IntervalFormatter;
    use tapstamp::libs::messages::macros::DEFAULT_LOG_FILTER;
    use tapstamp::libs::messages::Message;
    use tapstamp::libs::stamp::Stamp;
    use tapstamp::libs::timestamp::Instant;
    use tapstamp::libs::view::View;
    use tapstamp::{msg_bail_anyhow, msg_error_anyhow};

    #[test]
    fn test_message_text() {
        assert_eq!(Message::StampNotFound(3).to_string(), "No timestamp at position #3");
        assert_eq!(Message::StampsHeader(5, 5).to_string(), "Timestamps (5)");
        assert_eq!(Message::StampsHeader(2, 5).to_string(), "Timestamps (2 of 5)");
        assert_eq!(Message::NoteSaved(1).to_string(), "Note saved for #1");
        assert_eq!(Message::MillisecondsToggled(false).to_string(), "Milliseconds are now hidden in the list");
    }

    #[test]
    fn test_warning_text() {
        assert_eq!(Message::LegacyEntrySkipped(2).to_string(), "Skipped legacy entry 2 without a valid time");
        assert_eq!(Message::MaxRecordsReset(100).to_string(), "A record limit of 0 is not allowed, using 100");
        assert_eq!(
            Message::UnknownLocale("xx-XX".to_string(), "en_US".to_string()).to_string(),
            "Unknown locale 'xx-XX', using en_US"
        );
    }

    #[test]
    fn test_default_log_filter_shows_interval_traces() {
        let filter: tracing_subscriber::EnvFilter = DEFAULT_LOG_FILTER.parse().unwrap();
        assert_eq!(filter.to_string(), "tapstamp=trace");
    }

    #[test]
    fn test_error_macros_prefix_message() {
        let error = msg_error_anyhow!(Message::StampIdNotFound("42".to_string()));
        assert_eq!(error.to_string(), "❌ No timestamp with id 42");

        fn bail() -> anyhow::Result<()> {
            msg_bail_anyhow!(Message::NothingToExport);
        }
        assert_eq!(bail().unwrap_err().to_string(), "❌ No timestamps to export.");
    }

    #[test]
    fn test_view_has_one_row_per_stamp() {
        let stamp = |raw: &str| Stamp::new(raw.parse::<Instant>().unwrap(), "");
        let stamps = vec![stamp("2025-06-20T14:03:05.123Z"), stamp("2025-06-20T14:02:05.000Z")];

        let table = View::stamps(&stamps, &IntervalFormatter::new(true), "en_US");
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("INTERVAL"));
        assert!(rendered.contains("1m 0s 123ms"));
    }
}
