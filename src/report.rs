//! Assembled lookup results and their plain-text rendering.

use std::fmt;

use crate::error::LookupError;

/// Fixed site filter appended to the profile-discovery query.
const SITE_FILTER: &str = "site:linkedin.com";

/// Google search URL for locating `name` on a professional network.
///
/// Whitespace runs collapse to `+`, so "Jane Doe" yields
/// `q=Jane+Doe+site:linkedin.com`. The URL is only ever rendered, never
/// fetched.
pub fn professional_search_url(name: &str) -> String {
    let joined = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://www.google.com/search?q={joined}+{SITE_FILTER}")
}

/// One publication row: the identifier, its resolution outcome, and the
/// generated summary when the summarizer ran.
///
/// A failed resolution keeps its slot so the report cardinality always
/// matches the identifier list returned by the search.
#[derive(Debug)]
pub struct Entry {
    pub pmid: String,
    pub title: Result<String, LookupError>,
    pub summary: Option<String>,
}

/// Everything one lookup produces for a single name.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub entries: Vec<Entry>,
    pub profile_url: String,
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let profile_url = professional_search_url(&name);
        Self {
            name,
            entries: Vec::new(),
            profile_url,
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Research lookup for: {}", self.name)?;
        if self.entries.is_empty() {
            writeln!(f, "No research papers found.")?;
        } else {
            writeln!(f, "Latest research publications:")?;
            for entry in &self.entries {
                match &entry.title {
                    Ok(title) => writeln!(f, "- [{}] {}", entry.pmid, title)?,
                    Err(err) => writeln!(f, "- [{}] (title lookup failed: {})", entry.pmid, err)?,
                }
                if let Some(summary) = &entry.summary {
                    writeln!(f, "  Summary: {summary}")?;
                }
            }
        }
        writeln!(f, "Profile search: {}", self.profile_url)
    }
}
