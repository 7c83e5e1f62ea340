//! Scraper for the Lanzara group publications page.
//!
//! # Data Source
//! - Page: http://research.physics.berkeley.edu/lanzara/publications.html
//! - Format: hand-maintained HTML; one `<p>` per citation under `#centerDoc`,
//!   with `<h4>` year headings between groups
//! - Method: single linear pass over the container's direct children
//!
//! The page has no machine-readable structure, so extraction is heuristic:
//! which inline tag carries the title depends on when the citation was added
//! (the page's markup conventions changed over the years), and the author
//! list is recognized by comma density. Every per-node failure is converted
//! into a logged skip; the pass itself only fails on unusable input (missing
//! container).

use crate::config::PageSourceConfig;
use crate::logger;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Tag whose integer text advances the year cursor.
const YEAR_HEADING_TAG: &str = "h4";

/// Tag of a citation paragraph.
const RECORD_TAG: &str = "p";

/// Which inline tags may carry the title, by year bracket. Evaluated top
/// down; the first rule whose threshold the year meets applies. The final
/// rule has threshold 0 and always matches.
const TITLE_TAG_RULES: [(u32, &[&str]); 4] = [
    (2007, &["strong"]),
    (2001, &["b", "font"]),
    (2000, &["strong", "b"]),
    (0, &["span"]),
];

/// One publication extracted from the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Publication {
    /// Citation title, whitespace-normalized
    pub title: String,
    /// Author names in citation order
    pub authors: Vec<String>,
    /// Year taken from the heading the citation appears under
    pub year: u32,
    /// Journal link target, or `"#"` when the citation has no link
    pub href: String,
    /// Journal link text, or empty when the citation has no link
    pub journal: String,
}

/// Why a node produced no record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Too few descendant nodes to hold a citation
    TooLittleStructure,
    /// Not a citation paragraph
    NotAParagraph,
    /// Raw markup matched a deny-list fragment
    Denied(String),
    /// No title-bearing tag for the active year bracket
    MissingTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLittleStructure => write!(f, "too little structure"),
            SkipReason::NotAParagraph => write!(f, "not a paragraph"),
            SkipReason::Denied(fragment) => {
                write!(f, "matched deny-list fragment {:?}", fragment)
            }
            SkipReason::MissingTitle => {
                write!(f, "no title-bearing tag for this year bracket")
            }
        }
    }
}

/// Result of visiting one node during the pass.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeOutcome {
    /// The node is a year heading; the cursor moves to this year
    YearMarker(u32),
    /// The node yielded a publication record
    Record(Publication),
    /// The node was dropped
    Skip(SkipReason),
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title tag set for a year. Top-down scan of `TITLE_TAG_RULES`.
fn title_tags_for(year: u32) -> &'static [&'static str] {
    TITLE_TAG_RULES
        .iter()
        .find(|(threshold, _)| year >= *threshold)
        .map(|(_, tags)| *tags)
        .unwrap_or(&["span"])
}

/// Recognize a year heading: the heading tag with integer text.
///
/// Anything else, including a heading whose text does not parse, is a
/// negative result rather than an error.
fn year_from_heading(node: ElementRef<'_>) -> Option<u32> {
    if node.value().name() != YEAR_HEADING_TAG {
        return None;
    }
    node.text().collect::<String>().trim().parse().ok()
}

/// Decide whether a node is worth running field extraction on.
///
/// Returns the rejection reason, or `None` for a viable candidate. Checks
/// run in order: structure, tag, deny-list.
fn reject_candidate(node: ElementRef<'_>, config: &PageSourceConfig) -> Option<SkipReason> {
    // descendants() yields the node itself first
    let descendant_count = node.descendants().count() - 1;
    if descendant_count <= 1 {
        return Some(SkipReason::TooLittleStructure);
    }

    if node.value().name() != RECORD_TAG {
        return Some(SkipReason::NotAParagraph);
    }

    let raw = node.html();
    if let Some(fragment) = config.deny_list.iter().find(|f| raw.contains(f.as_str())) {
        return Some(SkipReason::Denied(fragment.clone()));
    }

    None
}

/// Pull title, authors, and journal link out of a candidate paragraph.
fn extract_record(
    node: ElementRef<'_>,
    year: u32,
    config: &PageSourceConfig,
) -> Result<Publication, SkipReason> {
    let title_tags = title_tags_for(year);
    let title = node
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| title_tags.contains(&el.value().name()))
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .ok_or(SkipReason::MissingTitle)?;

    // Author lists are comma-separated; page/volume metadata usually is not.
    // Fall back to any fragment naming the PI, then to no authors at all.
    let author_fragment = node
        .descendants()
        .filter_map(|d| d.value().as_text())
        .find(|t| t.matches(',').count() >= 2)
        .or_else(|| {
            node.descendants()
                .filter_map(|d| d.value().as_text())
                .find(|t| t.contains(config.author_fallback.as_str()))
        });
    let authors = match author_fragment {
        Some(fragment) => fragment
            .split(',')
            .map(normalize_ws)
            .filter(|a| !a.is_empty())
            .collect(),
        None => Vec::new(),
    };

    let (href, journal) = match node
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
    {
        Some(link) => (
            link.value().attr("href").unwrap_or("#").to_string(),
            normalize_ws(&link.text().collect::<String>()),
        ),
        None => ("#".to_string(), String::new()),
    };

    Ok(Publication {
        title,
        authors,
        year,
        href,
        journal,
    })
}

/// Visit one node with the current year cursor.
pub fn process_node(
    node: ElementRef<'_>,
    year: u32,
    config: &PageSourceConfig,
) -> NodeOutcome {
    if let Some(heading_year) = year_from_heading(node) {
        return NodeOutcome::YearMarker(heading_year);
    }
    if let Some(reason) = reject_candidate(node, config) {
        return NodeOutcome::Skip(reason);
    }
    match extract_record(node, year, config) {
        Ok(record) => NodeOutcome::Record(record),
        Err(reason) => NodeOutcome::Skip(reason),
    }
}

/// Run the extraction pass over a fetched page.
///
/// Scans the direct children of the configured container element in document
/// order, tracking the year cursor. Records are never re-tagged by a later
/// heading. Per-node failures are logged and skipped; only a missing or
/// unselectable container fails the pass.
pub fn extract_publications(
    html: &str,
    config: &PageSourceConfig,
) -> Result<Vec<Publication>, Box<dyn std::error::Error>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("#{}", config.container_id))
        .map_err(|e| format!("invalid container selector: {e}"))?;
    let container = document
        .select(&selector)
        .next()
        .ok_or_else(|| format!("container element #{} not found", config.container_id))?;

    let mut current_year = config.default_year;
    let mut records = Vec::new();

    for child in container.children() {
        let Some(node) = ElementRef::wrap(child) else {
            continue;
        };
        match process_node(node, current_year, config) {
            NodeOutcome::YearMarker(year) => {
                logger::info(&format!("year heading: {year}"));
                current_year = year;
            }
            NodeOutcome::Record(record) => records.push(record),
            NodeOutcome::Skip(reason) => match reason {
                SkipReason::TooLittleStructure | SkipReason::NotAParagraph => {
                    logger::debug(&format!("skipping node ({reason})"));
                }
                SkipReason::Denied(_) | SkipReason::MissingTitle => {
                    logger::warn(&format!(
                        "skipping node at year {current_year} ({reason}): {}",
                        node.html()
                    ));
                }
            },
        }
    }

    Ok(records)
}

/// Publications page scraper.
#[derive(Clone, Debug)]
pub struct PublicationsScraper {
    pub config: PageSourceConfig,
}

impl PublicationsScraper {
    /// Create a scraper with the default page configuration.
    pub fn new() -> Self {
        Self {
            config: PageSourceConfig::default(),
        }
    }

    /// Create a scraper with custom page configuration.
    pub fn with_config(config: PageSourceConfig) -> Self {
        Self { config }
    }

    /// Fetch the configured page and extract its publication records.
    pub async fn scrape(&self) -> Result<Vec<Publication>, Box<dyn std::error::Error>> {
        let client = Client::new();
        let cache_dir = self.config.cache_dir.as_deref().map(Path::new);
        let html = fetch_page(&client, &self.config.url, cache_dir).await?;
        extract_publications(&html, &self.config)
    }
}

impl Default for PublicationsScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a page, with an optional file cache keyed by URL hash.
///
/// The page changes rarely, so reruns against a warm cache never touch the
/// network and produce identical output.
async fn fetch_page(
    client: &Client,
    url: &str,
    cache_dir: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(dir) = cache_dir {
        let path = cache_path(dir, url);
        if path.exists() {
            return Ok(fs::read_to_string(path)?);
        }
    }

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("HTTP error: {}", resp.status()).into());
    }
    let text = resp.text().await?;

    if let Some(dir) = cache_dir {
        fs::create_dir_all(dir)?;
        fs::write(cache_path(dir, url), &text)?;
    }

    Ok(text)
}

fn cache_path(dir: &Path, url: &str) -> PathBuf {
    let hash = format!("{:x}", Sha256::digest(url.as_bytes()));
    dir.join(format!("{hash}.html"))
}
