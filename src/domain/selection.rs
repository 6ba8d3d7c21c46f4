// Selection domain models
use serde::{Deserialize, Serialize};

/// One selected item. A table row selection has only `row`, a cell has both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

#[cfg(test)]
impl SelectionEntry {
    pub fn row(row: usize) -> Self {
        Self {
            row: Some(row),
            column: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<SelectionEntry>);

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl Selection {
    pub fn rows(rows: impl IntoIterator<Item = usize>) -> Self {
        Self(rows.into_iter().map(SelectionEntry::row).collect())
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.0
    }
}

/// Two containers whose selections mirror each other. The pair is
/// unordered: linking `a` to `b` is the same link as `b` to `a`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionLink {
    first: String,
    second: String,
}

impl SelectionLink {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The container on the other end of the link from `container_id`
    pub fn partner_of(&self, container_id: &str) -> Option<&str> {
        if self.first == container_id {
            Some(&self.second)
        } else if self.second == container_id {
            Some(&self.first)
        } else {
            None
        }
    }

    pub fn involves(&self, container_id: &str) -> bool {
        self.partner_of(container_id).is_some()
    }
}
