use anyhow::Result;
use chrono::NaiveDate;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::CategoryToggles;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub years: YearRange,
    pub output: OutputConfig,
    pub holiday: HolidayApiConfig,
    pub almanac: AlmanacConfig,
    pub logging: LoggingConfig,
    pub feeds: Vec<FeedConfig>,
}

/// Inclusive year range covered by one generation run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl IntoIterator for YearRange {
    type Item = i32;
    type IntoIter = std::ops::RangeInclusive<i32>;

    /// Iterates the covered years in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the generated `.ics` files are written into.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayApiConfig {
    /// Base URL of the yearly holiday endpoint; the year is appended as a
    /// path segment.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlmanacConfig {
    /// Path of the JSON almanac dataset file.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// One generated calendar feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Output file name, without the `.ics` extension.
    pub file_name: String,
    /// Calendar display name (PRODID / X-WR-CALNAME).
    pub display_name: String,
    pub categories: CategoryToggles,
    /// Fetch multi-day holidays from the HTTP API instead of using the
    /// static `holidays` list.
    #[serde(default)]
    pub use_api: bool,
    /// Static per-day holiday records, used when `use_api` is off.
    #[serde(default)]
    pub holidays: Vec<StaticHoliday>,
}

/// One statically configured holiday day.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticHoliday {
    pub name: String,
    pub date: NaiveDate,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into
    /// a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("output.dir", ".")?
            .set_default("holiday.base_url", "https://timor.tech/api/holiday/year")?
            .set_default("almanac.path", "almanac.json")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks the cross-field rules a deserialized `Settings` must satisfy
    /// before generation starts.
    ///
    /// ## Errors
    /// Returns a validation error if the year range is inverted, the feed
    /// list is empty, or a feed has no file name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.years.end < self.years.start {
            return Err(CoreError::ValidationError(format!(
                "years.end ({}) must not precede years.start ({})",
                self.years.end, self.years.start
            )));
        }
        if self.feeds.is_empty() {
            return Err(CoreError::ValidationError(
                "at least one [[feeds]] entry is required".into(),
            ));
        }
        if let Some(feed) = self.feeds.iter().find(|f| f.file_name.trim().is_empty()) {
            return Err(CoreError::ValidationError(format!(
                "feed \"{}\" has an empty file_name",
                feed.display_name
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads and validates configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing, or validating the
/// configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(start: i32, end: i32, feeds: Vec<FeedConfig>) -> Settings {
        Settings {
            years: YearRange { start, end },
            output: OutputConfig { dir: ".".into() },
            holiday: HolidayApiConfig {
                base_url: "https://example.test/holiday/year".into(),
            },
            almanac: AlmanacConfig {
                path: "almanac.json".into(),
            },
            logging: LoggingConfig {
                level: "debug".into(),
            },
            feeds,
        }
    }

    fn feed(file_name: &str) -> FeedConfig {
        FeedConfig {
            file_name: file_name.into(),
            display_name: "Test".into(),
            categories: CategoryToggles::default(),
            use_api: false,
            holidays: Vec::new(),
        }
    }

    #[test]
    fn accepts_single_year_range() {
        assert!(settings(2024, 2024, vec![feed("calendar")]).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_year_range() {
        let err = settings(2025, 2024, vec![feed("calendar")])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("years.end"));
    }

    #[test]
    fn rejects_empty_feed_list() {
        assert!(settings(2024, 2025, Vec::new()).validate().is_err());
    }

    #[test]
    fn rejects_blank_file_name() {
        assert!(settings(2024, 2025, vec![feed("  ")]).validate().is_err());
    }

    #[test]
    fn year_range_iterates_inclusively() {
        let years: Vec<i32> = YearRange {
            start: 2024,
            end: 2026,
        }
        .into_iter()
        .collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
    }
}
