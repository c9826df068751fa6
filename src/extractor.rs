//! ASN token extraction and the merged identifier set.
//!
//! Payloads are scanned for every non-overlapping `AS<digits>` token, wherever it
//! appears in the text. The digits of each token are accumulated into an [`AsnSet`],
//! which collapses duplicates across and within sources and produces the final
//! ordered sequence.

use crate::constants::ASN_PATTERN;
use crate::models::{AsnId, SortOrder};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Cached regex for `AS<digits>` tokens.
/// Compiled once at initialization for performance.
static ASN_REGEX: OnceLock<Regex> = OnceLock::new();

fn asn_regex() -> &'static Regex {
    ASN_REGEX
        .get_or_init(|| Regex::new(ASN_PATTERN).expect("ASN_PATTERN is a valid regex pattern"))
}

/// Yields the identifier of every `AS<digits>` token in `payload`, in order of appearance.
///
/// The `AS` literal is case-sensitive and the digit run is taken greedily, so
/// `AS100AS200` yields `100` then `200`, while `as100` and `ASN100` yield nothing.
/// Duplicates are not removed here.
pub fn extract_asns(payload: &str) -> impl Iterator<Item = AsnId> + '_ {
    asn_regex()
        .captures_iter(payload)
        .filter_map(|caps| caps.get(1))
        .filter_map(|digits| AsnId::new(digits.as_str()))
}

/// Unique ASN identifiers accumulated across every fetched source.
#[derive(Debug, Default, Clone)]
pub struct AsnSet {
    ids: HashSet<AsnId>,
}

impl AsnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identifier, returning `true` if it was not already present.
    pub fn insert(&mut self, id: AsnId) -> bool {
        self.ids.insert(id)
    }

    /// Extracts every token from `payload` and returns how many new identifiers were added.
    pub fn extend_from_payload(&mut self, payload: &str) -> usize {
        let before = self.ids.len();
        self.ids.extend(extract_asns(payload));
        self.ids.len() - before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &AsnId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the identifiers as a sequence ordered by `order`.
    pub fn sorted(&self, order: SortOrder) -> Vec<AsnId> {
        let mut ids: Vec<AsnId> = self.ids.iter().cloned().collect();
        match order {
            SortOrder::Numeric => ids.sort_unstable_by(|a, b| a.numeric_cmp(b)),
            SortOrder::Lexicographic => ids.sort_unstable(),
        }
        ids
    }
}

impl FromIterator<AsnId> for AsnSet {
    fn from_iter<I: IntoIterator<Item = AsnId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
