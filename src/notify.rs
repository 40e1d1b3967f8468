// src/notify.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::listing::Announcement;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, item: &Announcement) -> Result<()>;
}

/// Posts one announcement per call to a Slack incoming webhook.
/// No retries: a failed send aborts the run so the seen-set is never
/// persisted ahead of a delivery.
pub struct SlackNotifier {
    webhook_url: String,
    client: Client,
    timeout: Duration,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fixed message shape: bold title, then issuing body, schedule and link,
/// one per line. Labels match the audience of the listing (Korean).
pub fn format_message(item: &Announcement) -> String {
    format!(
        "*{}*\n기관/유형: {}\n일정: {}\n링크: {}",
        item.title, item.org, item.schedule, item.link
    )
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, item: &Announcement) -> Result<()> {
        let body = serde_json::json!({ "text": format_message(item) });
        self.client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("slack webhook request failed")?
            .error_for_status()
            .context("slack webhook returned non-2xx")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_has_title_org_schedule_link_lines() {
        let item = Announcement {
            title: "2024 유튜브 제작 공고".into(),
            org: "서울시".into(),
            schedule: "2024-01-01 | 접수중".into(),
            link: "https://x/1".into(),
        };
        let msg = format_message(&item);
        assert_eq!(
            msg,
            "*2024 유튜브 제작 공고*\n기관/유형: 서울시\n일정: 2024-01-01 | 접수중\n링크: https://x/1"
        );
    }
}
