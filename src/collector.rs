use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::{ElementRef, Html, Selector};
use tracing::info;

use crate::course::{Course, UNKNOWN_DATE};
use crate::error::AppError;

/// List items containing this phrase are date headings, not courses.
pub const DATE_MARKER: &str = "Udemy Free Courses for";

const BROWSER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// hyphens, en-dashes and whitespace left over from "Title – <a>link</a>"
static TRAILING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-–]+$").expect("valid regex"));

pub struct CourseCollector {
    item_selector: Selector,
    link_selector: Selector,
}

impl Default for CourseCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCollector {
    pub fn new() -> Self {
        CourseCollector {
            item_selector: Selector::parse("ul li").expect("valid selector"),
            link_selector: Selector::parse("a[href]").expect("valid selector"),
        }
    }

    /// Walks the list items in document order. Every course gets the most
    /// recent date heading seen before it, or "Unknown" when there was none.
    pub fn collect<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = Course> + 'a {
        let mut current_date: Option<String> = None;

        document.select(&self.item_selector).filter_map(move |item| {
            let text = own_text(item);

            if let Some(text) = text {
                if text.contains(DATE_MARKER) {
                    current_date = Some(text.trim().to_string());
                    return None;
                }
            }

            let url = item
                .select(&self.link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
                .filter(|href| !href.is_empty())?;

            let title = clean_title(text?);
            if title.is_empty() {
                return None;
            }

            Some(Course {
                title,
                url: url.to_string(),
                date: current_date
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            })
        })
    }
}

pub fn parse_courses(html: &str) -> Vec<Course> {
    let document = Html::parse_document(html);
    CourseCollector::new().collect(&document).collect()
}

pub fn fetch_page(url: &str) -> Result<String, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_AGENT));

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .default_headers(headers)
        .build()?;

    info!(url, "fetching course listing");
    let response = client.get(url).send()?.error_for_status()?;
    let body = response.text()?;
    info!(url, bytes = body.len(), "page fetched");
    Ok(body)
}

// first text node directly under the item, descendants are ignored
fn own_text(item: ElementRef<'_>) -> Option<&str> {
    item.children()
        .find_map(|node| node.value().as_text())
        .map(|text| &**text)
}

fn clean_title(raw: &str) -> String {
    TRAILING_SEPARATORS
        .replace(raw.trim(), "")
        .trim()
        .to_string()
}
