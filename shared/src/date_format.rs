use chrono::{Locale, NaiveDate, TimeZone, Utc};

const LONG_DATE: &str = "%A, %B %-d, %Y";

/// Formats `data-date` attributes as long, localized dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFormatter {
    locale: Locale,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Builds a formatter from a BCP 47 tag such as `navigator.language`.
    pub fn from_language_tag(tag: &str) -> Self {
        Self::new(parse_locale(tag).unwrap_or(Locale::en_US))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `"2024-06-01"` becomes `"Saturday, June 1, 2024"` in `en_US`.
    ///
    /// Returns `None` when the attribute does not start with an ISO date.
    pub fn format_long(&self, raw: &str) -> Option<String> {
        let date = parse_iso_date(raw)?;
        let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
        Some(midnight.format_localized(LONG_DATE, self.locale).to_string())
    }

    /// Like [`format_long`](Self::format_long) but falls back to the raw text.
    pub fn label_for(&self, raw: &str) -> String {
        self.format_long(raw).unwrap_or_else(|| raw.trim().to_string())
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_locale(tag: &str) -> Option<Locale> {
    let normalized = tag.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Some(locale);
    }
    // Bare language tags ("fr") map to their home region ("fr_FR").
    let language = normalized.split('_').next()?;
    let guess = format!("{}_{}", language, language.to_uppercase());
    Locale::try_from(guess.as_str()).ok()
}
