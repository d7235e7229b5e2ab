//! Parent -> children adjacency construction.
//!
//! Rows that name the same parent are merged. Parents keep the order in which
//! they first appear; each parent's children keep first-occurrence order and
//! never repeat.

use std::collections::{BTreeSet, HashMap};

use lineage_model::Token;
use serde::Serialize;

use crate::normalize::{normalize_cell, parent_token};

/// Ordered mapping from parent token to its distinct child tokens.
///
/// Only [`AdjacencyBuilder`] (or [`FromIterator`]) mutates a map; once built it
/// is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: Vec<(Token, Vec<Token>)>,
    index: HashMap<Token, usize>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the children not already listed under `parent`.
    fn merge(&mut self, parent: Token, children: Vec<Token>) {
        match self.index.get(&parent) {
            Some(&slot) => {
                let existing = &mut self.entries[slot].1;
                for child in children {
                    if !existing.contains(&child) {
                        existing.push(child);
                    }
                }
            }
            None => {
                self.index.insert(parent.clone(), self.entries.len());
                self.entries.push((parent, dedupe_preserving_order(children)));
            }
        }
    }

    /// Children of `parent`, or `None` if it never headed a row.
    pub fn children(&self, parent: &Token) -> Option<&[Token]> {
        self.index
            .get(parent)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_parent(&self, token: &Token) -> bool {
        self.index.contains_key(token)
    }

    /// Parents in first-appearance order.
    pub fn parents(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter().map(|(parent, _)| parent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, &[Token])> {
        self.entries
            .iter()
            .map(|(parent, children)| (parent, children.as_slice()))
    }

    /// Number of parents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total parent -> child links, counting self-loops.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, children)| children.len()).sum()
    }
}

impl FromIterator<(Token, Vec<Token>)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (Token, Vec<Token>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (parent, children) in iter {
            map.merge(parent, children);
        }
        map
    }
}

fn dedupe_preserving_order(tokens: Vec<Token>) -> Vec<Token> {
    let mut seen = BTreeSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Why a row contributed nothing to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The row had no cells at all.
    EmptyRow,
    /// The parent cell was blank.
    BlankParent,
    /// The parent cell held a missing sentinel such as `nan`.
    MissingParent,
}

impl SkipReason {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EmptyRow => "empty row",
            Self::BlankParent => "blank parent cell",
            Self::MissingParent => "missing-value parent cell",
        }
    }
}

/// A row dropped during construction, kept for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Zero-based row position in the source table.
    pub index: usize,
    pub reason: SkipReason,
}

/// What happened to a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Merged { parent: Token, children: usize },
    Skipped(SkipReason),
}

/// Accumulates rows into an [`AdjacencyMap`].
#[derive(Debug, Default)]
pub struct AdjacencyBuilder {
    map: AdjacencyMap,
    rows_read: usize,
    skipped: Vec<SkippedRow>,
}

impl AdjacencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one raw row: cell 0 is the parent, the rest are relatives.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) -> RowOutcome {
        let index = self.rows_read;
        self.rows_read += 1;

        let Some((parent_cell, relatives)) = row.split_first() else {
            return self.skip(index, SkipReason::EmptyRow);
        };
        let Some(parent) = parent_token(parent_cell.as_ref()) else {
            let reason = if parent_cell.as_ref().trim().is_empty() {
                SkipReason::BlankParent
            } else {
                SkipReason::MissingParent
            };
            return self.skip(index, reason);
        };

        let raw_children: Vec<Token> = relatives
            .iter()
            .flat_map(|cell| normalize_cell(cell.as_ref()))
            .collect();
        let children = dedupe_preserving_order(raw_children);
        let count = children.len();
        self.map.merge(parent.clone(), children);
        RowOutcome::Merged {
            parent,
            children: count,
        }
    }

    fn skip(&mut self, index: usize, reason: SkipReason) -> RowOutcome {
        tracing::debug!(row = index, reason = reason.label(), "skipping row");
        self.skipped.push(SkippedRow { index, reason });
        RowOutcome::Skipped(reason)
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn finish(self) -> (AdjacencyMap, Vec<SkippedRow>) {
        (self.map, self.skipped)
    }
}

/// Builds the adjacency map for a whole table, discarding the skip log.
pub fn build_adjacency<R, S>(rows: impl IntoIterator<Item = R>) -> AdjacencyMap
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut builder = AdjacencyBuilder::new();
    for row in rows {
        builder.push_row(row.as_ref());
    }
    builder.finish().0
}
