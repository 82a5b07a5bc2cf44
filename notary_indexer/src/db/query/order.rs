// SPDX-License-Identifier: AGPL-3.0-or-later

/// Options to determine the direction of the ordering.
///
/// Records are always ordered by their position on the chain: block number first, then log index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Oldest records first.
    Ascending,

    /// Newest records first.
    Descending,
}

impl Direction {
    /// Returns the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ascending
    }
}
