// src/listing.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::filter::normalize;

/// One row of the procurement listing, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub org: String,
    /// Remaining descriptive columns (dates, status, ...), joined with " | ".
    pub schedule: String,
    /// Absolute detail-page URL; the listing URL itself when the row has no link.
    pub link: String,
}

#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Current announcements in document order (newest first on the page).
    async fn fetch_list(&self) -> Result<Vec<Announcement>>;
}

/// Fetches the listing page over HTTP and extracts its first table.
pub struct HttpListing {
    url: Url,
    client: Client,
    timeout: Duration,
}

impl HttpListing {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
            timeout: Duration::from_secs(20),
        }
    }
}

#[async_trait]
impl ListingSource for HttpListing {
    async fn fetch_list(&self) -> Result<Vec<Announcement>> {
        let body = self
            .client
            .get(self.url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .context("listing page request failed")?
            .error_for_status()
            .context("listing page returned non-success status")?
            .text()
            .await
            .context("reading listing page body")?;
        Ok(parse_listing(&body, &self.url))
    }
}

fn cell_text(el: ElementRef<'_>) -> String {
    normalize(&el.text().collect::<Vec<_>>().join(" "))
}

/// Extract announcements from the first `<table>` of the page.
///
/// No table means no announcements, not a parse failure. Rows need at least
/// two cells: column 0 is the issuing body, column 1 the title, the rest the
/// schedule. The first hyperlink anywhere in the row is resolved against the
/// listing URL. Rows whose title normalizes to empty are dropped.
pub fn parse_listing(html: &str, base_url: &Url) -> Vec<Announcement> {
    let sel_table = Selector::parse("table").expect("invalid table selector");
    let sel_tr = Selector::parse("tr").expect("invalid tr selector");
    let sel_td = Selector::parse("td").expect("invalid td selector");
    let sel_a = Selector::parse("a[href]").expect("invalid link selector");

    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&sel_table).next() else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for row in table.select(&sel_tr) {
        let cells: Vec<ElementRef<'_>> = row.select(&sel_td).collect();
        if cells.len() < 2 {
            continue;
        }
        let title = cell_text(cells[1]);
        if title.is_empty() {
            continue;
        }
        let org = cell_text(cells[0]);
        let schedule = cells[2..]
            .iter()
            .map(|td| cell_text(*td))
            .collect::<Vec<_>>()
            .join(" | ");
        let link = row
            .select(&sel_a)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| base_url.join(href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| base_url.to_string());

        items.push(Announcement {
            title,
            org,
            schedule,
            link,
        });
    }
    items
}
