#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use tapstamp::libs::timestamp::{
        format_display, format_display_in, format_export, format_export_in, format_with, resolve_locale, FormatOptions,
        Instant, InstantError,
    };

    fn instant(raw: &str) -> Instant {
        raw.parse().unwrap()
    }

    #[test]
    fn test_display_with_milliseconds() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(format_display_in(&stamp, &Utc, true, "en_US"), "Jun 20, 2025, 2:03:05 PM (123ms)");
    }

    #[test]
    fn test_display_without_milliseconds() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(format_display_in(&stamp, &Utc, false, "en_US"), "Jun 20, 2025, 2:03:05 PM");
    }

    #[test]
    fn test_display_pads_milliseconds_to_three_digits() {
        let stamp = instant("2025-01-02T03:04:05.007Z");
        assert_eq!(format_display_in(&stamp, &Utc, true, "en_US"), "Jan 2, 2025, 3:04:05 AM (007ms)");

        let whole = instant("2025-01-02T00:00:00Z");
        assert_eq!(format_display_in(&whole, &Utc, true, "en_US"), "Jan 2, 2025, 12:00:00 AM (000ms)");
    }

    #[test]
    fn test_export_uses_sortable_form() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(format_export_in(&stamp, &Utc, true), "2025-06-20 14:03:05.123");
        assert_eq!(format_export_in(&stamp, &Utc, false), "2025-06-20 14:03:05");
    }

    #[test]
    fn test_export_follows_time_zone() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        let east = FixedOffset::east_opt(10 * 3600).unwrap();
        let west = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(format_export_in(&stamp, &east, true), "2025-06-21 00:03:05.123");
        assert_eq!(format_export_in(&stamp, &west, true), "2025-06-20 09:03:05.123");
    }

    #[test]
    fn test_locale_tags_are_normalized() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        let expected = format_display_in(&stamp, &Utc, true, "en_US");

        for tag in ["en-US", "en_US.UTF-8", "en_US@euro", " en_US "] {
            assert_eq!(format_display_in(&stamp, &Utc, true, tag), expected, "tag {}", tag);
        }
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(format_display_in(&stamp, &Utc, false, "xx-XX"), "Jun 20, 2025, 2:03:05 PM");
        assert_eq!(format_display_in(&stamp, &Utc, false, ""), "Jun 20, 2025, 2:03:05 PM");

        let fallback = stamp.as_datetime().format_localized("%B", resolve_locale("xx-XX")).to_string();
        assert_eq!(fallback, "June");
    }

    #[test]
    fn test_display_in_other_locale() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(format_display_in(&stamp, &Utc, true, "fr_FR"), "juin 20, 2025, 2:03:05 PM (123ms)");
        assert_eq!(format_display_in(&stamp, &Utc, false, "fr-FR"), "juin 20, 2025, 2:03:05 PM");
    }

    #[test]
    fn test_display_keeps_morning_and_afternoon_apart() {
        let morning = instant("2025-06-20T02:03:05.000Z");
        let afternoon = instant("2025-06-20T14:03:05.000Z");

        for locale in ["en_US", "fr_FR", "de_DE", "ru_RU", "ja_JP"] {
            let am = format_display_in(&morning, &Utc, false, locale);
            let pm = format_display_in(&afternoon, &Utc, false, locale);
            assert_ne!(am, pm, "locale {}", locale);
        }

        assert!(format_display_in(&morning, &Utc, false, "de_DE").ends_with("2:03:05 AM"));
        assert!(format_display_in(&afternoon, &Utc, false, "de_DE").ends_with("2:03:05 PM"));
    }

    #[test]
    fn test_display_has_no_surrounding_whitespace() {
        let stamp = instant("2025-06-20T02:03:05.000Z");

        for locale in ["en_US", "fr_FR", "de_DE", "ja_JP"] {
            let output = format_display_in(&stamp, &Utc, false, locale);
            assert_eq!(output, output.trim(), "locale {}", locale);
        }
        assert!(format_display_in(&stamp, &Utc, false, "ja_JP").starts_with("6月 20, 2025"));
    }

    #[test]
    fn test_export_in_local_time_has_sortable_shape() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        let output = format_export(&stamp, true);

        assert_eq!(output.len(), "YYYY-MM-DD HH:MM:SS.mmm".len(), "{}", output);
        for (i, c) in output.chars().enumerate() {
            match i {
                4 | 7 => assert_eq!(c, '-', "{}", output),
                10 => assert_eq!(c, ' ', "{}", output),
                13 | 16 => assert_eq!(c, ':', "{}", output),
                19 => assert_eq!(c, '.', "{}", output),
                _ => assert!(c.is_ascii_digit(), "{}", output),
            }
        }
        assert!(output.ends_with(".123"));
        assert_eq!(format_export(&stamp, false), output[..19]);
    }

    #[test]
    fn test_format_with_dispatches_on_export_mode() {
        let stamp = instant("2025-06-20T14:03:05.123Z");

        let export = FormatOptions {
            include_milliseconds: true,
            locale: "fr_FR".to_string(),
            export_mode: true,
        };
        assert_eq!(format_with(&stamp, &export), format_export(&stamp, true));

        let display = FormatOptions {
            include_milliseconds: false,
            ..FormatOptions::default()
        };
        let output = format_with(&stamp, &display);
        assert_eq!(output, format_display(&stamp, false, "en_US"));
        assert!(output.starts_with("Jun 2"), "{}", output);
        assert!(!output.contains("ms)"));
    }

    #[test]
    fn test_instant_round_trip() {
        let stamp = instant("2025-06-20T14:03:05.123Z");
        assert_eq!(stamp.to_string(), "2025-06-20T14:03:05.123Z");
        assert_eq!(instant(&stamp.to_string()), stamp);
    }

    #[test]
    fn test_instant_normalizes_offset_and_precision() {
        let offset = instant("2025-06-20T16:03:05.123+02:00");
        assert_eq!(offset.to_string(), "2025-06-20T14:03:05.123Z");

        let nanos = instant("2025-06-20T14:03:05.123456789Z");
        assert_eq!(nanos.millisecond(), 123);
        assert_eq!(nanos, instant("2025-06-20T14:03:05.123Z"));
    }

    #[test]
    fn test_instant_millis() {
        let earlier = instant("2025-06-20T14:02:05.000Z");
        let later = instant("2025-06-20T14:03:05.123Z");

        assert_eq!(later.millis_since(&earlier), 60123);
        assert_eq!(earlier.millis_since(&later), -60123);
        assert_eq!(Instant::from_millis(later.timestamp_millis()), Some(later));
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        for raw in ["", "yesterday", "2025-13-01T00:00:00Z", "2025-06-20 14:03:05"] {
            assert_eq!(raw.parse::<Instant>(), Err(InstantError::Invalid(raw.to_string())));
        }
    }

    #[test]
    fn test_default_format_options() {
        let options = FormatOptions::default();
        assert!(options.include_milliseconds);
        assert!(!options.export_mode);
        assert_eq!(options.locale, "en_US");
    }
}
