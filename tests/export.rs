#[cfg(test)]
mod tests {
    use chrono::Utc;
    use std::fs;
    use tapstamp::libs::config::{Config, TimestampStyle};
    use tapstamp::libs::export::{ExportOptions, Exporter, DEFAULT_EXPORT_FILE};
    use tapstamp::libs::stamp::Stamp;
    use tapstamp::libs::timestamp::Instant;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        stamps: Vec<Stamp>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let stamp = |raw: &str, note: &str| Stamp::new(raw.parse::<Instant>().unwrap(), note);
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                stamps: vec![
                    stamp("2025-06-20T14:03:05.123Z", "after lunch, \"quoted\""),
                    stamp("2025-06-20T14:02:05.000Z", ""),
                    stamp("2025-06-19T14:02:04.000Z", ""),
                ],
            }
        }
    }

    fn options(style: TimestampStyle, include_milliseconds: bool) -> ExportOptions {
        ExportOptions {
            style,
            include_milliseconds,
            interval_milliseconds: include_milliseconds,
            locale: "en_US".to_string(),
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_sortable_export_with_milliseconds(ctx: &mut ExportTestContext) {
        let csv = Exporter::new(options(TimestampStyle::Sortable, true), None)
            .in_zone(Utc)
            .render(&ctx.stamps)
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                r#""Timestamp","Interval","Note""#,
                r#""2025-06-20 14:03:05.123","1m 0s 123ms","after lunch, ""quoted""""#,
                r#""2025-06-20 14:02:05.000","1d 0h 0m 1s 0ms","""#,
                r#""2025-06-19 14:02:04.000","","""#,
            ]
        );
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_sortable_export_without_milliseconds(ctx: &mut ExportTestContext) {
        let csv = Exporter::new(options(TimestampStyle::Sortable, false), None)
            .in_zone(Utc)
            .render(&ctx.stamps)
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], r#""2025-06-20 14:03:05","1m 0s","after lunch, ""quoted""""#);
        assert_eq!(lines[2], r#""2025-06-20 14:02:05","1d 0h 0m 1s","""#);
        assert_eq!(lines[3], r#""2025-06-19 14:02:04","","""#);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_display_style_export(ctx: &mut ExportTestContext) {
        let csv = Exporter::new(options(TimestampStyle::Display, true), None)
            .in_zone(Utc)
            .render(&ctx.stamps)
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with(r#""Jun 20, 2025, 2:03:05 PM (123ms)","1m 0s 123ms","#));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_interval_milliseconds_independent_of_timestamp(ctx: &mut ExportTestContext) {
        let mut opts = options(TimestampStyle::Sortable, false);
        opts.interval_milliseconds = true;

        let csv = Exporter::new(opts, None).in_zone(Utc).render(&ctx.stamps).unwrap();
        let second = csv.lines().nth(1).unwrap();
        assert!(second.starts_with(r#""2025-06-20 14:03:05","1m 0s 123ms","#), "{}", second);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_write_creates_file(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("out.csv");
        let exporter = Exporter::new(options(TimestampStyle::Sortable, true), Some(path.clone())).in_zone(Utc);

        exporter.write(&ctx.stamps).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, exporter.render(&ctx.stamps).unwrap());
        assert!(written.starts_with("\"Timestamp\",\"Interval\",\"Note\""));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_export_is_rejected(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.csv");
        let exporter = Exporter::new(options(TimestampStyle::Sortable, true), Some(path.clone()));

        let err = exporter.write(&[]).unwrap_err();
        assert!(err.to_string().contains("No timestamps to export."));
        assert!(!path.exists());
        assert!(exporter.render(&[]).is_err());
    }

    #[test]
    fn test_default_output_and_config_options() {
        let config = Config::default();
        let options = ExportOptions::from_config(&config);
        assert_eq!(options.style, TimestampStyle::Display);
        assert!(options.include_milliseconds);
        assert!(options.interval_milliseconds);

        let exporter = Exporter::new(options, None);
        assert_eq!(exporter.output_path().to_str(), Some(DEFAULT_EXPORT_FILE));
    }
}
