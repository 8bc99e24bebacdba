//! Incremental color-name search
//!
//! A client types a name one keystroke at a time. Each keystroke usually
//! extends the previous query, and every name matching the longer query also
//! matched the shorter one, so the session filters its previous result
//! instead of rescanning the whole [`NameCatalog`].
//!
//! # Transitions
//!
//! | query                                 | transition                   |
//! |---------------------------------------|------------------------------|
//! | fewer than 2 characters               | [`Transition::Ignored`]      |
//! | first query, or not extending the last| [`Transition::Reset`]        |
//! | previous query plus trailing text     | [`Transition::Narrow`]       |
//!
//! # Overflow
//!
//! When more than [`MAX_SUGGESTIONS`] names match, the first
//! [`MAX_SUGGESTIONS`] are dropped and the remainder is kept, in the session
//! as well as in the reply. Later narrowing starts from that remainder.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::CatalogRecord;
use crate::color::{LuvLch, Srgb};

/// Overflow threshold for one result list.
pub const MAX_SUGGESTIONS: usize = 50;

/// Queries shorter than this many characters are ignored.
pub const MIN_QUERY_CHARS: usize = 2;

/// One autocomplete hit as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub hex: String,
}

/// Every searchable color name, in display order.
///
/// Ordered by CIE LCh(uv) lightness, then hue, then chroma, and then
/// reversed, so the lightest names come first.
#[derive(Debug, Clone, Default)]
pub struct NameCatalog {
    entries: Vec<Suggestion>,
}

impl NameCatalog {
    /// Build the catalog from the names records. Names are lower-cased.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogRecord>,
    {
        let mut keyed: Vec<(LuvLch, Suggestion)> = records
            .into_iter()
            .map(|record| {
                let hex = record.display_hex();
                let lch = hex
                    .parse::<Srgb>()
                    .map(LuvLch::from)
                    .unwrap_or_else(|_| LuvLch::from(record.lab.to_srgb()));
                let suggestion = Suggestion {
                    name: record.name.to_lowercase(),
                    hex,
                };
                (lch, suggestion)
            })
            .collect();

        keyed.sort_by(|(x, _), (y, _)| compare_lch(x, y));
        keyed.reverse();

        Self {
            entries: keyed.into_iter().map(|(_, s)| s).collect(),
        }
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Suggestion> for NameCatalog {
    /// Takes entries as given, without sorting.
    fn from_iter<I: IntoIterator<Item = Suggestion>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn compare_lch(x: &LuvLch, y: &LuvLch) -> Ordering {
    x.l.total_cmp(&y.l)
        .then(x.h.total_cmp(&y.h))
        .then(x.c.total_cmp(&y.c))
}

/// Which path a query takes through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Too short: state and result are left alone
    Ignored,
    /// Full scan of the catalog
    Reset,
    /// Filter of the previous result
    Narrow,
}

/// Per-connection search state.
///
/// A session is owned by exactly one connection and driven by `&mut self`,
/// so queries are applied one at a time in arrival order. It is not shared
/// and needs no locking.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteSession {
    last_query: String,
    last_result: Vec<Suggestion>,
}

impl AutocompleteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that already answered `last_query` with `last_result`.
    pub fn resume(last_query: impl Into<String>, last_result: Vec<Suggestion>) -> Self {
        Self {
            last_query: last_query.into(),
            last_result,
        }
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn last_result(&self) -> &[Suggestion] {
        &self.last_result
    }

    /// The transition `query` would take, without applying it.
    pub fn classify(&self, query: &str) -> Transition {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Transition::Ignored;
        }
        let query = query.to_lowercase();
        if self.last_query.is_empty() || !query.starts_with(&self.last_query) {
            Transition::Reset
        } else {
            Transition::Narrow
        }
    }

    /// Apply one query and return the new result, or `None` when the query
    /// is ignored.
    ///
    /// ```
    /// use color_core::{AutocompleteSession, NameCatalog, Suggestion};
    ///
    /// let catalog: NameCatalog = ["red", "redwood", "blue"]
    ///     .into_iter()
    ///     .map(|name| Suggestion { name: name.into(), hex: "#000000".into() })
    ///     .collect();
    ///
    /// let mut session = AutocompleteSession::new();
    /// assert_eq!(session.submit(&catalog, "Red").unwrap().len(), 2);
    /// assert_eq!(session.submit(&catalog, "redw").unwrap()[0].name, "redwood");
    /// assert!(session.submit(&catalog, "r").is_none());
    /// ```
    pub fn submit(&mut self, catalog: &NameCatalog, query: &str) -> Option<&[Suggestion]> {
        let transition = self.classify(query);
        if transition == Transition::Ignored {
            return None;
        }

        let query = query.to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();

        let mut result: Vec<Suggestion> = match transition {
            Transition::Narrow => std::mem::take(&mut self.last_result)
                .into_iter()
                .filter(|s| matches_all(&s.name, &tokens))
                .collect(),
            _ => catalog
                .entries()
                .iter()
                .filter(|s| matches_all(&s.name, &tokens))
                .cloned()
                .collect(),
        };

        if result.len() > MAX_SUGGESTIONS {
            result.drain(..MAX_SUGGESTIONS);
        }

        self.last_result = result;
        self.last_query = query;
        Some(&self.last_result)
    }
}

fn matches_all(name: &str, tokens: &[&str]) -> bool {
    tokens.iter().all(|token| name.contains(token))
}
