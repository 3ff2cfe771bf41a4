//! Plain-text search over the document.
//!
//! Terms are matched literally. Case-insensitive matching folds ASCII only,
//! so every reported position is a byte offset into the original text.

use regex_lite::{Regex, RegexBuilder};

use super::text_ops::floor_char_boundary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub term: String,
    pub case_sensitive: bool,
}

impl FindQuery {
    pub fn new(term: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            term: term.into(),
            case_sensitive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    /// The search passed the end of the text and restarted from the top.
    pub wrapped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found(Match),
    NotFound,
}

fn matcher(query: &FindQuery) -> Option<Regex> {
    if query.term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex_lite::escape(&query.term))
        .case_insensitive(!query.case_sensitive)
        .build()
        .map_err(|e| log::warn!("Cannot search for {:?}: {}", query.term, e))
        .ok()
}

/// Next occurrence at or after `from`, wrapping to the start of the text.
pub fn find_next(haystack: &str, query: &FindQuery, from: usize) -> FindOutcome {
    let Some(re) = matcher(query) else {
        return FindOutcome::NotFound;
    };
    let from = floor_char_boundary(haystack, from);

    if let Some(m) = re.find_at(haystack, from) {
        return FindOutcome::Found(Match {
            start: m.start(),
            end: m.end(),
            wrapped: false,
        });
    }

    match re.find(haystack) {
        Some(m) if m.start() < from => FindOutcome::Found(Match {
            start: m.start(),
            end: m.end(),
            wrapped: true,
        }),
        _ => FindOutcome::NotFound,
    }
}

/// Every non-overlapping occurrence, in order.
pub fn find_all(haystack: &str, query: &FindQuery) -> Vec<Match> {
    let Some(re) = matcher(query) else {
        return Vec::new();
    };
    re.find_iter(haystack)
        .map(|m| Match {
            start: m.start(),
            end: m.end(),
            wrapped: false,
        })
        .collect()
}
