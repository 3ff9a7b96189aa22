//! Calendar math for the day row.
//!
//! Pure functions: the dates of a month and the localized labels shown on
//! day cards and in the month/year header.

use chrono::{Datelike, Locale, NaiveDate, TimeZone, Utc};

use crate::error::{PickerError, PickerResult};
use crate::models::calendar_date::CalendarDate;
use crate::utils::date::days_in_month;

/// Default region for language-only tags whose region code differs from
/// the language code.
const LANGUAGE_DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("en", "en_US"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("el", "el_GR"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("zh", "zh_CN"),
];

/// All dates of `month` in `year`, from the 1st to the last day, ascending.
///
/// Recomputed on every call.
///
/// # Examples
/// ```
/// use horizontal_date_picker::services::calendar::days_of_month;
///
/// assert_eq!(days_of_month(2000, 2).unwrap().len(), 29);
/// assert_eq!(days_of_month(1900, 2).unwrap().len(), 28);
/// assert!(days_of_month(2024, 13).is_err());
/// ```
pub fn days_of_month(year: i32, month: u32) -> PickerResult<Vec<CalendarDate>> {
    let length = days_in_month(year, month).ok_or(PickerError::InvalidMonth(month))?;
    (1..=length)
        .map(|day| CalendarDate::new(year, month, day))
        .collect()
}

/// Short weekday abbreviation for `date` in the given locale ("Mon", "Di", ...).
pub fn weekday_label(date: CalendarDate, locale_tag: &str) -> String {
    weekday_label_in(date, resolve_locale(locale_tag))
}

/// Like [`weekday_label`], for a locale that has already been resolved.
pub fn weekday_label_in(date: CalendarDate, locale: Locale) -> String {
    format_localized(date.as_naive(), "%a", locale)
}

/// Full month name for the navigator header ("January", "März", ...).
pub fn month_label(month: u32, locale_tag: &str) -> PickerResult<String> {
    month_label_in(month, resolve_locale(locale_tag))
}

pub fn month_label_in(month: u32, locale: Locale) -> PickerResult<String> {
    let first = NaiveDate::from_ymd_opt(2000, month, 1).ok_or(PickerError::InvalidMonth(month))?;
    Ok(format_localized(first, "%B", locale))
}

/// Resolve a locale tag such as `en_US`, `en-US` or `de` to a chrono locale.
///
/// Unknown tags fall back to POSIX, which formats like US English.
pub fn resolve_locale(locale_tag: &str) -> Locale {
    match try_resolve_locale(locale_tag) {
        Some(locale) => locale,
        None => {
            log::warn!("Unknown locale '{}', falling back to POSIX", locale_tag);
            Locale::POSIX
        }
    }
}

/// Resolve a locale tag, or `None` when no chrono locale matches it.
pub fn try_resolve_locale(locale_tag: &str) -> Option<Locale> {
    let normalized = locale_tag.trim().replace('-', "_");
    // Drop encoding/modifier suffixes ("de_DE.UTF-8", "sr_RS@latin")
    let normalized = normalized
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .to_string();

    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Some(locale);
    }

    let language = normalized
        .split('_')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let candidate = LANGUAGE_DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, tag)| tag.to_string())
        .unwrap_or_else(|| format!("{}_{}", language, language.to_uppercase()));

    Locale::try_from(candidate.as_str()).ok()
}

fn format_localized(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => Utc
            .from_utc_datetime(&midnight)
            .format_localized(pattern, locale)
            .to_string(),
        None => date.format(pattern).to_string(),
    }
}

/// Zero-based day offset of `date` within its month.
pub fn day_index(date: CalendarDate) -> usize {
    date.as_naive().day0() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_days_of_month_leap_years() {
        assert_eq!(days_of_month(2000, 2).unwrap().len(), 29);
        assert_eq!(days_of_month(1900, 2).unwrap().len(), 28);
        assert_eq!(days_of_month(2024, 2).unwrap().len(), 29);
        assert_eq!(days_of_month(2023, 2).unwrap().len(), 28);
    }

    #[test]
    fn test_days_of_month_bounds() {
        let days = days_of_month(2023, 4).unwrap();
        assert_eq!(days.first(), Some(&date(2023, 4, 1)));
        assert_eq!(days.last(), Some(&date(2023, 4, 30)));
    }

    #[test]
    fn test_days_of_month_invalid_month() {
        assert_eq!(days_of_month(2023, 0), Err(PickerError::InvalidMonth(0)));
        assert_eq!(days_of_month(2023, 13), Err(PickerError::InvalidMonth(13)));
    }

    #[test]
    fn test_weekday_label_english() {
        // Monday, Jan 1, 2024
        assert_eq!(weekday_label(date(2024, 1, 1), "en_US"), "Mon");
        assert_eq!(weekday_label(date(2024, 1, 7), "en-US"), "Sun");
    }

    #[test]
    fn test_weekday_label_german() {
        assert_eq!(weekday_label(date(2024, 1, 1), "de_DE"), "Mo");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(try_resolve_locale("xx_YY"), None);
        assert_eq!(resolve_locale("xx_YY"), Locale::POSIX);
        assert_eq!(weekday_label(date(2024, 1, 1), ""), "Mon");
    }

    #[test]
    fn test_language_only_tags() {
        assert_eq!(resolve_locale("en"), Locale::en_US);
        assert_eq!(resolve_locale("de"), Locale::de_DE);
        assert_eq!(resolve_locale("fr_FR.UTF-8"), Locale::fr_FR);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1, "en_US").unwrap(), "January");
        assert_eq!(month_label(3, "de_DE").unwrap(), "März");
        assert_eq!(month_label(13, "en_US"), Err(PickerError::InvalidMonth(13)));
        assert_eq!(month_label_in(2, Locale::de_DE).unwrap(), "Februar");
    }

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(date(2024, 2, 1)), 0);
        assert_eq!(day_index(date(2024, 2, 29)), 28);
    }
}
