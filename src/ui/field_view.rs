// src/ui/field_view.rs
//! Decides how one field of a record is shown.
//!
//! [`field_view`] is a pure mapping from `(key, value, mode)` to a
//! [`FieldView`]; painting it with egui happens in
//! `ui::widgets::field_widgets`. The first matching rule wins:
//!
//! 1. the identifier is plain `"key: value"` text in both modes
//! 2. booleans: `True`/`False`, or a radio pair when editing
//! 3. numbers: the number, or a numeric input parsed as a base-10 integer
//! 4. `email`: an email-hinted input
//! 5. `registered`: a `YYYY-MM-DD` date, or a date picker
//! 6. text longer than [`LONG_TEXT_THRESHOLD`]: a multi-line text area
//! 7. anything else: a single-line text input

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::dataset::record::{format_number, FieldValue, IDENTIFIER_KEY};

pub const EMAIL_KEY: &str = "email";
pub const REGISTERED_KEY: &str = "registered";
/// Text longer than this many UTF-16 code units is edited in a text area.
pub const LONG_TEXT_THRESHOLD: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Read,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldView {
    /// Non-editable `"key: value"` line.
    Plain(String),
    /// A `key:` label followed by a control.
    Labeled { label: String, control: FieldControl },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    Display(String),
    /// Two exclusive choices bound to `true` and `false`.
    BoolChoice(bool),
    /// Numeric input; `NaN` shows as an empty box.
    NumberInput(f64),
    EmailInput(String),
    /// Date picker seeded with a `YYYY-MM-DD` string (may be empty).
    DateInput(String),
    TextArea(String),
    TextInput(String),
}

pub fn field_view(key: &str, value: &FieldValue, mode: EditMode) -> FieldView {
    if key == IDENTIFIER_KEY {
        return FieldView::Plain(format!("{}: {}", key, value.display_text()));
    }

    let editing = mode == EditMode::Edit;
    let control = match value {
        FieldValue::Bool(b) if editing => FieldControl::BoolChoice(*b),
        FieldValue::Bool(b) => FieldControl::Display(bool_label(*b).to_string()),
        FieldValue::Number(n) if editing => FieldControl::NumberInput(*n),
        FieldValue::Number(n) => FieldControl::Display(format_number(*n)),
        _ if key == EMAIL_KEY => {
            let text = value.display_text();
            if editing { FieldControl::EmailInput(text) } else { FieldControl::Display(text) }
        }
        _ if key == REGISTERED_KEY => {
            let date = format_date_string(&value.display_text());
            if editing { FieldControl::DateInput(date) } else { FieldControl::Display(date) }
        }
        FieldValue::Text(s) if s.encode_utf16().count() > LONG_TEXT_THRESHOLD => {
            if editing { FieldControl::TextArea(s.clone()) } else { FieldControl::Display(s.clone()) }
        }
        _ => {
            let text = value.display_text();
            if editing { FieldControl::TextInput(text) } else { FieldControl::Display(text) }
        }
    };

    FieldView::Labeled { label: key.to_string(), control }
}

pub fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Integer parse with `parseInt(text, 10)` rules: leading whitespace is
/// skipped, an optional sign is accepted, and the longest run of decimal
/// digits is used. No digits gives `NaN`.
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return f64::NAN;
    }
    let magnitude = digits
        .bytes()
        .fold(0.0_f64, |acc, d| acc * 10.0 + f64::from(d - b'0'));
    if negative { -magnitude } else { magnitude }
}

/// Text shown inside a numeric input.
pub fn number_input_text(value: f64) -> String {
    if value.is_finite() { format_number(value) } else { String::new() }
}

/// Renders a date-time string as its UTC calendar date, `YYYY-MM-DD`.
/// Anything unparseable becomes an empty string.
pub fn format_date_string(raw: &str) -> String {
    parse_date_time(raw.trim())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // e.g. "2014-04-27T05:29:41 -02:00"
    for fmt in ["%Y-%m-%dT%H:%M:%S %:z", "%Y-%m-%dT%H:%M:%S%.f %:z", "%Y-%m-%d %H:%M:%S %:z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    // Without an offset the value is taken as UTC.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn labeled(key: &str, control: FieldControl) -> FieldView {
        FieldView::Labeled { label: key.to_string(), control }
    }

    #[test]
    fn test_identifier_is_plain_in_both_modes() {
        for mode in [EditMode::Read, EditMode::Edit] {
            assert_eq!(field_view("id", &text("abc123"), mode), FieldView::Plain("id: abc123".into()));
        }
    }

    #[test]
    fn test_boolean_views() {
        assert_eq!(
            field_view("isActive", &FieldValue::Bool(true), EditMode::Read),
            labeled("isActive", FieldControl::Display("True".into()))
        );
        assert_eq!(
            field_view("isActive", &FieldValue::Bool(false), EditMode::Read),
            labeled("isActive", FieldControl::Display("False".into()))
        );
        assert_eq!(
            field_view("isActive", &FieldValue::Bool(false), EditMode::Edit),
            labeled("isActive", FieldControl::BoolChoice(false))
        );
    }

    #[test]
    fn test_number_views() {
        assert_eq!(
            field_view("age", &FieldValue::Number(33.0), EditMode::Read),
            labeled("age", FieldControl::Display("33".into()))
        );
        assert_eq!(
            field_view("age", &FieldValue::Number(33.0), EditMode::Edit),
            labeled("age", FieldControl::NumberInput(33.0))
        );
    }

    #[test]
    fn test_number_beats_key_rules() {
        // Type checks come before the email/registered key checks.
        assert_eq!(
            field_view("email", &FieldValue::Number(1.0), EditMode::Edit),
            labeled("email", FieldControl::NumberInput(1.0))
        );
        assert_eq!(
            field_view("registered", &FieldValue::Bool(true), EditMode::Read),
            labeled("registered", FieldControl::Display("True".into()))
        );
    }

    #[test]
    fn test_email_views() {
        assert_eq!(
            field_view("email", &text("a@b.c"), EditMode::Edit),
            labeled("email", FieldControl::EmailInput("a@b.c".into()))
        );
        assert_eq!(
            field_view("email", &text("not an email"), EditMode::Read),
            labeled("email", FieldControl::Display("not an email".into()))
        );
    }

    #[test]
    fn test_registered_round_trip() {
        let original = text("2020-01-15T10:00:00Z");
        assert_eq!(
            field_view("registered", &original, EditMode::Read),
            labeled("registered", FieldControl::Display("2020-01-15".into()))
        );
        assert_eq!(
            field_view("registered", &original, EditMode::Edit),
            labeled("registered", FieldControl::DateInput("2020-01-15".into()))
        );
        // The picker writes back a bare date, which reads back verbatim.
        let edited = text("2021-06-01");
        assert_eq!(
            field_view("registered", &edited, EditMode::Read),
            labeled("registered", FieldControl::Display("2021-06-01".into()))
        );
    }

    #[test]
    fn test_unparseable_date_is_empty() {
        assert_eq!(
            field_view("registered", &text("someday"), EditMode::Edit),
            labeled("registered", FieldControl::DateInput(String::new()))
        );
    }

    #[test]
    fn test_long_text_gets_text_area_but_full_display() {
        let long = "word ".repeat(30);
        assert_eq!(
            field_view("about", &text(&long), EditMode::Edit),
            labeled("about", FieldControl::TextArea(long.clone()))
        );
        assert_eq!(
            field_view("about", &text(&long), EditMode::Read),
            labeled("about", FieldControl::Display(long))
        );
    }

    #[test]
    fn test_exactly_threshold_stays_single_line() {
        let edge = "a".repeat(LONG_TEXT_THRESHOLD);
        assert_eq!(
            field_view("about", &text(&edge), EditMode::Edit),
            labeled("about", FieldControl::TextInput(edge))
        );
    }

    #[test]
    fn test_threshold_counts_utf16_units() {
        // 50 emoji are 50 chars but 100 UTF-16 units; one more unit tips it over.
        let at_limit = "\u{1F600}".repeat(50);
        assert_eq!(
            field_view("about", &text(&at_limit), EditMode::Edit),
            labeled("about", FieldControl::TextInput(at_limit.clone()))
        );
        let over = format!("{at_limit}a");
        assert_eq!(
            field_view("about", &text(&over), EditMode::Edit),
            labeled("about", FieldControl::TextArea(over))
        );
    }

    #[test]
    fn test_default_text_views() {
        assert_eq!(
            field_view("name", &text("Ada"), EditMode::Edit),
            labeled("name", FieldControl::TextInput("Ada".into()))
        );
        assert_eq!(
            field_view("name", &text("Ada"), EditMode::Read),
            labeled("name", FieldControl::Display("Ada".into()))
        );
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), 42.0);
        assert_eq!(parse_int("  -17"), -17.0);
        assert_eq!(parse_int("+8"), 8.0);
        assert_eq!(parse_int("12abc"), 12.0);
        assert_eq!(parse_int("3.9"), 3.0);
        assert_eq!(parse_int("007"), 7.0);
        assert!(parse_int("").is_nan());
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("-").is_nan());
        assert!(parse_int(" + 1").is_nan());
    }

    #[test]
    fn test_number_input_text() {
        assert_eq!(number_input_text(42.0), "42");
        assert_eq!(number_input_text(f64::NAN), "");
    }

    #[test]
    fn test_bundled_registered_dates_all_format() {
        let records = crate::dataset::record::parse_records(include_str!("../../assets/data.json")).unwrap();
        for rec in records.iter().take(200) {
            let raw = rec.get(REGISTERED_KEY).map(FieldValue::display_text).unwrap_or_default();
            let formatted = format_date_string(&raw);
            assert_eq!(formatted.len(), 10, "could not format {raw:?}");
        }
    }

    #[test]
    fn test_format_date_string_variants() {
        assert_eq!(format_date_string("2020-01-15T10:00:00Z"), "2020-01-15");
        assert_eq!(format_date_string("2020-01-15T10:00:00.250Z"), "2020-01-15");
        // Offsets are normalized to UTC before truncation.
        assert_eq!(format_date_string("2014-04-27T23:29:41 -02:00"), "2014-04-28");
        assert_eq!(format_date_string("2014-04-27T05:29:41 -02:00"), "2014-04-27");
        assert_eq!(format_date_string("2021-06-01"), "2021-06-01");
        assert_eq!(format_date_string("2021-06-01T08:30:00"), "2021-06-01");
        assert_eq!(format_date_string(""), "");
        assert_eq!(format_date_string("2021-13-45"), "");
    }
}
