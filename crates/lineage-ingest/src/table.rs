use serde::{Deserialize, Serialize};

/// One table row: cell 0 is the parent, cells 1.. are relatives.
pub type RawRow = Vec<String>;

/// A headerless table of raw cell text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRow> {
        self.rows.iter()
    }
}

impl From<Vec<RawRow>> for RawTable {
    fn from(rows: Vec<RawRow>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a RawTable {
    type Item = &'a RawRow;
    type IntoIter = std::slice::Iter<'a, RawRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
