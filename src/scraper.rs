use anyhow::{Context, Result};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

pub const BASE_URL: &str = "https://wiki.bloodontheclocktower.com/";

const DEFAULT_PAGES: [&str; 6] = [
    "Trouble_Brewing",
    "Sects_%26_Violets",
    "Bad_Moon_Rising",
    "Travellers",
    "Fabled",
    "Experimental",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconRecord {
    pub name: String,
    pub icon: String,
}

/// The six wiki pages scraped when no --url overrides are given.
pub fn default_urls() -> Vec<String> {
    DEFAULT_PAGES
        .iter()
        .map(|page| format!("{}{}", BASE_URL, page))
        .collect()
}

pub fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to send request to {}", url))?;

    let response = response
        .error_for_status()
        .with_context(|| format!("Request to {} returned an error status", url))?;

    response
        .text()
        .with_context(|| format!("Failed to get response text from {}", url))
}

pub fn extract_icons(html: &str) -> Result<Vec<IconRecord>> {
    let document = Html::parse_document(html);
    let img_selector = Selector::parse("img.thumbimage").unwrap();

    let mut records = Vec::new();

    for img in document.select(&img_selector) {
        // The item name lives on the nearest enclosing link's title attribute
        let link = img
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "a");

        let link = match link {
            Some(link) => link,
            None => return Err(anyhow::anyhow!("Thumbnail image has no enclosing link")),
        };

        let name = link.value().attr("title").ok_or_else(|| {
            anyhow::anyhow!("Enclosing link of a thumbnail image has no title attribute")
        })?;

        let src = img
            .value()
            .attr("src")
            .ok_or_else(|| anyhow::anyhow!("Thumbnail image has no src attribute"))?;

        let icon = if src.starts_with("http") {
            src.to_string()
        } else {
            format!("{}{}", BASE_URL, src)
        };

        records.push(IconRecord {
            name: name.to_string(),
            icon,
        });
    }

    Ok(records)
}

/// Fetch every URL in order and collect the icon records from each page.
/// Any fetch or extraction failure aborts the whole run.
pub fn scrape_icons(urls: &[String]) -> Result<Vec<IconRecord>> {
    let client = Client::new();
    let mut records = Vec::new();

    for url in urls {
        eprintln!("> Downloading {}", url);
        let html = fetch_html(&client, url)?;
        eprintln!("> Done!");

        records.extend(extract_icons(&html)?);
    }

    Ok(records)
}
