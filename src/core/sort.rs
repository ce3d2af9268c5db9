//! Sort intent and the tri-state direction cycle

use serde::{Deserialize, Serialize};

/// Direction of an active (or inactive) sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// The cyclic successor: ascending → descending → none → ascending
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    pub fn is_none(self) -> bool {
        self == SortDirection::None
    }
}

/// The currently active sort key and direction
///
/// Canonical no-sort form is an empty key paired with `None`; every
/// transition maintains that pairing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortIntent {
    pub key: String,
    pub direction: SortDirection,
}

impl SortIntent {
    /// The canonical no-sort state
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Whether this intent actually reorders anything
    pub fn is_active(&self) -> bool {
        !self.key.is_empty() && !self.direction.is_none()
    }

    /// Apply a sort request for `key`
    ///
    /// Requesting the active key cycles its direction; when the cycle
    /// reaches `None` the key resets to empty. Requesting a different key
    /// jumps straight to ascending with no memory of the previous key's
    /// direction. An empty key clears the sort.
    pub fn toggle(&mut self, key: &str) {
        if key.is_empty() {
            *self = Self::none();
            return;
        }
        if self.key == key {
            self.direction = self.direction.next();
            if self.direction.is_none() {
                self.key.clear();
            }
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Ascending;
        }
    }

    /// The direction currently applied to `key`
    pub fn direction_for(&self, key: &str) -> SortDirection {
        if !key.is_empty() && self.key == key {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// Parse a sort spec string
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::none();
        }
        match spec.split_once(':') {
            Some((key, direction)) => {
                let key = key.trim();
                if key.is_empty() {
                    return Self::none();
                }
                match direction.trim() {
                    "desc" | "descending" => Self::descending(key),
                    _ => Self::ascending(key),
                }
            }
            None => Self::ascending(spec),
        }
    }
}
