//! Yearly holiday data client.
//!
//! The endpoint returns, per year, a map from an opaque key to day entries;
//! only entries flagged as holidays with a usable name and date become
//! records. Transport and decoding failures are per-year: one bad year never
//! aborts the rest of the range.

use std::collections::HashMap;

use chrono::NaiveDate;
use nongli_core::config::YearRange;
use serde::Deserialize;

use crate::error::FeedResult;
use crate::holiday::HolidayDay;

#[derive(Debug, Deserialize)]
struct YearPayload {
    code: i64,
    #[serde(default)]
    holiday: HashMap<String, HolidayEntry>,
}

#[derive(Debug, Deserialize)]
struct HolidayEntry {
    #[serde(default)]
    date: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    holiday: bool,
}

/// Client for the yearly holiday endpoint.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: String,
}

impl HolidayClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches and parses one year's holiday records.
    ///
    /// ## Errors
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// an undecodable body.
    pub async fn fetch_year(&self, year: i32) -> FeedResult<Vec<HolidayDay>> {
        let url = format!("{}/{year}", self.base_url.trim_end_matches('/'));
        let payload: YearPayload = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records_from_payload(year, payload))
    }

    /// Fetches every year of the inclusive range.
    ///
    /// A year that fails to fetch is logged and contributes zero records.
    pub async fn fetch_years(&self, years: YearRange) -> Vec<HolidayDay> {
        let mut records = Vec::new();
        for year in years {
            match self.fetch_year(year).await {
                Ok(mut days) => {
                    tracing::debug!(year, count = days.len(), "Fetched holiday records");
                    records.append(&mut days);
                }
                Err(e) => {
                    tracing::warn!(year, error = %e, "Failed to fetch holiday data, skipping year");
                }
            }
        }
        records
    }
}

fn records_from_payload(year: i32, payload: YearPayload) -> Vec<HolidayDay> {
    if payload.code != 0 {
        tracing::warn!(year, code = payload.code, "Holiday API reported an error status");
        return Vec::new();
    }

    payload
        .holiday
        .into_values()
        .filter_map(|entry| {
            if !entry.holiday || entry.name.trim().is_empty() {
                return None;
            }
            match entry.date.parse::<NaiveDate>() {
                Ok(date) => Some(HolidayDay {
                    name: entry.name,
                    date,
                }),
                Err(_) => {
                    tracing::debug!(year, date = %entry.date, "Skipping entry with unparseable date");
                    None
                }
            }
        })
        .collect()
}
