#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tapstamp::libs::config::{Config, TimestampStyle, DEFAULT_MAX_RECORDS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("nested").join("config.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.include_milliseconds);
        assert_eq!(config.max_records, DEFAULT_MAX_RECORDS);
        assert!(!config.trace_formatting);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.display.locale = Some("de_DE".to_string());
        config.export.style = TimestampStyle::Sortable;
        config.export.interval_milliseconds = false;
        config.max_records = 25;

        config.save_to(&ctx.path).unwrap();
        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        fs::write(&ctx.path, r#"{"display": {"include_milliseconds": false}, "export": {"style": "sortable"}}"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert!(!config.display.include_milliseconds);
        assert_eq!(config.export.style, TimestampStyle::Sortable);
        assert!(config.export.include_milliseconds);
        assert_eq!(config.max_records, DEFAULT_MAX_RECORDS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_max_records_is_normalized(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        fs::write(&ctx.path, r#"{"max_records": 0}"#).unwrap();

        assert_eq!(Config::read_from(&ctx.path).unwrap().max_records, DEFAULT_MAX_RECORDS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        fs::write(&ctx.path, "{ not json").unwrap();

        let err = Config::read_from(&ctx.path).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }

    #[test]
    fn test_toggle_milliseconds() {
        let mut config = Config::default();
        assert!(!config.toggle_milliseconds());
        assert!(!config.display.include_milliseconds);
        assert!(config.toggle_milliseconds());
        // Export settings are untouched by the display toggle.
        assert!(config.export.include_milliseconds);
    }

    #[test]
    fn test_configured_locale_wins() {
        let mut config = Config::default();
        config.display.locale = Some("fr_FR".to_string());
        assert_eq!(config.locale(), "fr_FR");
    }

    #[test]
    fn test_style_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TimestampStyle::Sortable).unwrap(), "\"sortable\"");
        assert_eq!(TimestampStyle::Display.to_string(), "display");
    }
}
