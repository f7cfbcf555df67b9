//! Per-feed generation loop.

use std::path::Path;

use anyhow::{Context, Result};
use nongli_core::config::{FeedConfig, Settings};
use nongli_feed::almanac::dataset::DatasetSource;
use nongli_feed::holiday::api::HolidayClient;
use nongli_feed::holiday::{HolidayDay, merge_holiday_spans};
use nongli_feed::plan::plan_events;
use nongli_ics::build::serialize_feed;

/// Generates every configured feed.
///
/// The almanac dataset is loaded once and API-backed holiday years are
/// fetched once, shared across feeds. A feed that fails is logged and
/// skipped so the remaining feeds still get written; the overall run fails
/// afterwards if any feed did.
///
/// ## Errors
/// Returns an error if the almanac dataset cannot be loaded, or if one or
/// more feeds failed to generate.
pub async fn run(config: &Settings) -> Result<()> {
    let almanac = DatasetSource::load(&config.almanac.path)
        .with_context(|| format!("loading almanac dataset {}", config.almanac.path))?;

    let api_records = if config.feeds.iter().any(|feed| feed.use_api) {
        let client = HolidayClient::new(config.holiday.base_url.clone());
        client.fetch_years(config.years).await
    } else {
        Vec::new()
    };

    let mut failures = 0_usize;
    for feed in &config.feeds {
        if let Err(e) = generate_feed(config, feed, &almanac, &api_records).await {
            failures += 1;
            tracing::error!(feed = %feed.file_name, error = ?e, "Feed generation failed");
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} feed(s) failed to generate");
    }
    Ok(())
}

async fn generate_feed(
    config: &Settings,
    feed: &FeedConfig,
    almanac: &DatasetSource,
    api_records: &[HolidayDay],
) -> Result<()> {
    let records: Vec<HolidayDay> = if feed.use_api {
        api_records.to_vec()
    } else {
        feed.holidays
            .iter()
            .map(|holiday| HolidayDay {
                name: holiday.name.clone(),
                date: holiday.date,
            })
            .collect()
    };

    let spans = merge_holiday_spans(records)?;
    let events = plan_events(config.years, almanac, &spans, feed.categories)?;
    let document = serialize_feed(&feed.display_name, &events);

    let path = Path::new(&config.output.dir).join(format!("{}.ics", feed.file_name));
    tokio::fs::write(&path, document)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(
        feed = %feed.file_name,
        spans = spans.len(),
        events = events.len(),
        path = %path.display(),
        "Feed written"
    );
    Ok(())
}
