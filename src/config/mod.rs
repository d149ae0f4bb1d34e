use std::env;

use chrono::{NaiveDate, Utc};

/// Process-wide report defaults loaded once at startup. Engine entry points
/// still take explicit configuration; this only supplies the defaults the
/// surrounding application passes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of trailing calendar months a default report covers.
    pub trailing_months: u32,
    /// The date reports treat as "now". Overridable for reproducible
    /// regeneration of historical reports.
    pub today: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REPORT_TRAILING_MONTHS must be a whole number of months >= 1")]
    InvalidTrailingMonths,
    #[error("REPORT_TODAY must be a YYYY-MM-DD date")]
    InvalidToday,
}

impl ReportConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let trailing_months = match env::var("REPORT_TRAILING_MONTHS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|months| *months >= 1)
                .ok_or(ConfigError::InvalidTrailingMonths)?,
            Err(_) => 12,
        };

        let today = match env::var("REPORT_TODAY") {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidToday)?,
            Err(_) => Utc::now().date_naive(),
        };

        Ok(Self {
            trailing_months,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("REPORT_TRAILING_MONTHS");
        env::remove_var("REPORT_TODAY");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = ReportConfig::load().expect("config loads with defaults");
        assert_eq!(config.trailing_months, 12);
        assert_eq!(config.today, Utc::now().date_naive());
    }

    #[test]
    fn today_override_enables_reproducible_reports() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REPORT_TODAY", "2024-03-15");
        let config = ReportConfig::load().expect("config loads");
        assert_eq!(
            config.today,
            NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
        );
        reset_env();
    }

    #[test]
    fn zero_trailing_months_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REPORT_TRAILING_MONTHS", "0");
        let result = ReportConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidTrailingMonths)));
        reset_env();
    }

    #[test]
    fn malformed_today_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REPORT_TODAY", "15-03-2024");
        let result = ReportConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidToday)));
        reset_env();
    }
}
