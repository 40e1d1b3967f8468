// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Seoul public contract portal, bid announcement listing.
pub const LISTING_URL: &str = "https://contract.seoul.go.kr/new1/views/pubBidInfo.do";

/// Titles are matched against these, case-insensitively, as substrings.
/// Edit in source; there is deliberately no external keyword config.
pub const KEYWORDS: &[&str] = &["유튜브", "영상", "브랜딩", "인플루언서", "라이브커머스", "디자인"];

const STATE_FILE: &str = "seen.json";
const ENV_WEBHOOK: &str = "SLACK_WEBHOOK";

/// Immutable run configuration, built once at startup and passed into the
/// pipeline. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub listing_url: Url,
    pub keywords: Vec<String>,
    pub state_path: PathBuf,
    /// Pause between consecutive Slack sends.
    pub notify_pause: Duration,
    /// When true (the default, matching historical behavior), every fetched
    /// announcement is marked seen even if no keyword matched, so a later
    /// keyword change never resurfaces old announcements. Set false to let
    /// unmatched announcements be reconsidered on future runs.
    pub mark_unmatched_seen: bool,
}

impl Config {
    /// Pre-flight configuration check; fails before any network call is made.
    pub fn from_env() -> Result<Self> {
        let webhook_url = std::env::var(ENV_WEBHOOK).with_context(|| {
            format!("{ENV_WEBHOOK} is not set (add the Slack webhook URL to the environment)")
        })?;
        let listing_url = Url::parse(LISTING_URL).context("parsing listing URL")?;
        Ok(Self {
            webhook_url,
            listing_url,
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            state_path: PathBuf::from(STATE_FILE),
            notify_pause: Duration::from_millis(300),
            mark_unmatched_seen: true,
        })
    }
}
