// src/pipeline.rs
use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::filter::KeywordFilter;
use crate::listing::{Announcement, ListingSource};
use crate::notify::Notifier;
use crate::state::{fingerprint, SeenSet};

/// Counters for one run, for the operator log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub new_seen: usize,
    pub notified: usize,
}

/// Walk fetched records in page order and split out the ones to notify.
///
/// Two explicit steps per record: first the dedup check against `seen`,
/// then the keyword check. Every previously-unseen record is marked seen
/// regardless of match outcome (unless `mark_unmatched_seen` is off, in
/// which case only matches are marked). Returned hits keep fetch order,
/// newest first; the caller reverses before sending.
pub fn plan_run<'a>(
    seen: &mut SeenSet,
    records: &'a [Announcement],
    filter: &KeywordFilter,
    mark_unmatched_seen: bool,
) -> Vec<&'a Announcement> {
    let mut hits = Vec::new();
    for item in records {
        let fp = fingerprint(&item.title, &item.link);
        if seen.contains(&fp) {
            continue;
        }
        let matched = filter.matches(&item.title);
        if matched {
            hits.push(item);
        }
        if matched || mark_unmatched_seen {
            seen.insert(fp);
        }
    }
    hits
}

/// One complete run: load state, fetch, plan, notify oldest-first, save.
///
/// Any failure aborts the whole run. A fetch failure happens before any
/// state mutation; a notify failure happens before the save, so the state
/// file on disk is untouched in both cases. Notifications already sent when
/// a later step fails are re-sent on the next run.
pub async fn run_once(
    cfg: &Config,
    source: &dyn ListingSource,
    notifier: &dyn Notifier,
) -> Result<RunSummary> {
    let mut seen = SeenSet::load(&cfg.state_path).context("loading seen-set")?;
    let before = seen.len();

    let records = source.fetch_list().await.context("fetching listing")?;
    info!(fetched = records.len(), seen = before, "listing fetched");

    let filter = KeywordFilter::new(&cfg.keywords);
    let mut hits = plan_run(&mut seen, &records, &filter, cfg.mark_unmatched_seen);

    // The page lists newest first; deliver oldest first.
    hits.reverse();
    for item in &hits {
        notifier
            .notify(item)
            .await
            .with_context(|| format!("notifying \"{}\"", item.title))?;
        tokio::time::sleep(cfg.notify_pause).await;
    }

    seen.save(&cfg.state_path).context("saving seen-set")?;

    let summary = RunSummary {
        fetched: records.len(),
        new_seen: seen.len() - before,
        notified: hits.len(),
    };
    info!(
        fetched = summary.fetched,
        new_seen = summary.new_seen,
        notified = summary.notified,
        "run complete"
    );
    Ok(summary)
}
