use std::ops::RangeInclusive;
use std::time::Duration;

use log::warn;
use thiserror::Error;

pub const TOLERANCE_PERCENT_RANGE: RangeInclusive<f64> = 0.1..=50.0;
pub const QUESTION_COUNT_RANGE: RangeInclusive<usize> = 1..=30;

const DEFAULT_TOLERANCE_FRACTION: f64 = 0.05;
const DEFAULT_QUESTION_COUNT: usize = 8;
const DEFAULT_AI_TIMEOUT_SECS: u64 = 15;

/// Shown to the user as-is, hence the Spanish messages.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("\"{0}\" no es un número válido")]
    NotANumber(String),
    #[error("la tolerancia debe estar entre 0.1 % y 50 % (recibí {0} %)")]
    ToleranceOutOfRange(f64),
    #[error("el número de preguntas debe estar entre 1 y 30 (recibí {0})")]
    QuestionCountOutOfRange(i64),
}

/// Per-session knobs. Read by every grading and quiz-start operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    tolerance_fraction: f64,
    question_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance_fraction: DEFAULT_TOLERANCE_FRACTION,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl Settings {
    pub fn tolerance_fraction(&self) -> f64 {
        self.tolerance_fraction
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_fraction * 100.0
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn set_tolerance_percent(&mut self, percent: f64) -> Result<(), SettingsError> {
        if !TOLERANCE_PERCENT_RANGE.contains(&percent) {
            return Err(SettingsError::ToleranceOutOfRange(percent));
        }
        self.tolerance_fraction = percent / 100.0;
        Ok(())
    }

    pub fn set_question_count(&mut self, count: usize) -> Result<(), SettingsError> {
        if !QUESTION_COUNT_RANGE.contains(&count) {
            return Err(SettingsError::QuestionCountOutOfRange(count as i64));
        }
        self.question_count = count;
        Ok(())
    }

    /// Accepts "5", "2,5" or "12.5 %".
    pub fn parse_tolerance_percent(&mut self, input: &str) -> Result<(), SettingsError> {
        let trimmed = input.trim().trim_end_matches('%');
        let percent =
            parse_number(trimmed).ok_or_else(|| SettingsError::NotANumber(input.trim().to_string()))?;
        self.set_tolerance_percent(percent)
    }

    pub fn parse_question_count(&mut self, input: &str) -> Result<(), SettingsError> {
        let count: i64 = input
            .trim()
            .parse()
            .map_err(|_| SettingsError::NotANumber(input.trim().to_string()))?;
        let count = usize::try_from(count).map_err(|_| SettingsError::QuestionCountOutOfRange(count))?;
        self.set_question_count(count)
    }
}

/// Parses a user-typed number, accepting `,` as decimal separator.
/// Non-finite values are rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub chatgpt_api_key: Option<String>,
    pub ai_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let chatgpt_api_key = lookup("CHATGPT_API_KEY").filter(|key| !key.trim().is_empty());

        let ai_timeout_secs = match lookup("SMARTFORM_AI_TIMEOUT_SECS") {
            None => DEFAULT_AI_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid SMARTFORM_AI_TIMEOUT_SECS={raw:?}");
                DEFAULT_AI_TIMEOUT_SECS
            }),
        };

        Self {
            chatgpt_api_key,
            ai_timeout: Duration::from_secs(ai_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tolerance_fraction(), 0.05);
        assert_eq!(settings.question_count(), 8);
    }

    #[test]
    fn tolerance_is_stored_as_fraction() {
        let mut settings = Settings::default();
        settings.parse_tolerance_percent("2,5 %").unwrap();
        assert_eq!(settings.tolerance_fraction(), 0.025);

        settings.set_tolerance_percent(0.1).unwrap();
        assert_eq!(settings.tolerance_fraction(), 0.001);
        settings.set_tolerance_percent(50.0).unwrap();
        assert_eq!(settings.tolerance_fraction(), 0.5);
    }

    #[test]
    fn tolerance_out_of_range_keeps_previous_value() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.set_tolerance_percent(50.5),
            Err(SettingsError::ToleranceOutOfRange(50.5))
        );
        assert_eq!(
            settings.parse_tolerance_percent("0"),
            Err(SettingsError::ToleranceOutOfRange(0.0))
        );
        assert_eq!(
            settings.parse_tolerance_percent("mucho"),
            Err(SettingsError::NotANumber("mucho".to_string()))
        );
        assert_eq!(settings.tolerance_fraction(), 0.05);
    }

    #[test]
    fn question_count_bounds() {
        let mut settings = Settings::default();
        settings.parse_question_count(" 30 ").unwrap();
        assert_eq!(settings.question_count(), 30);
        settings.set_question_count(1).unwrap();
        assert_eq!(settings.question_count(), 1);

        assert_eq!(
            settings.parse_question_count("31"),
            Err(SettingsError::QuestionCountOutOfRange(31))
        );
        assert_eq!(
            settings.parse_question_count("-2"),
            Err(SettingsError::QuestionCountOutOfRange(-2))
        );
        assert_eq!(
            settings.parse_question_count("2.5"),
            Err(SettingsError::NotANumber("2.5".to_string()))
        );
        assert_eq!(settings.question_count(), 1);
    }

    #[test]
    fn parse_number_accepts_comma_and_rejects_nan() {
        assert_eq!(parse_number(" 3,75 "), Some(3.75));
        assert_eq!(parse_number("-1e3"), Some(-1000.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("tres"), None);
    }

    #[test]
    fn app_config_from_lookup() {
        let config = AppConfig::from_lookup(|name| match name {
            "CHATGPT_API_KEY" => Some("sk-test".to_string()),
            "SMARTFORM_AI_TIMEOUT_SECS" => Some("30".to_string()),
            _ => None,
        });
        assert_eq!(config.chatgpt_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai_timeout, Duration::from_secs(30));

        let config = AppConfig::from_lookup(|name| match name {
            "CHATGPT_API_KEY" => Some("  ".to_string()),
            "SMARTFORM_AI_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.chatgpt_api_key, None);
        assert_eq!(config.ai_timeout, Duration::from_secs(15));
    }
}
