//! Publication scraping for the group website.
//!
//! One source lives here: the hand-maintained publications page, scraped by
//! `publications`. The module exposes the pure extraction pass (usable on any
//! fetched HTML string) and a `PublicationsScraper` that fetches the live
//! page and runs the pass over it.

pub mod publications;
