// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::Enum;

use crate::db::query::Direction;

/// Possible ordering direction for listing queries.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OrderDirection {
    #[graphql(name = "ASC")]
    Ascending,

    #[graphql(name = "DESC")]
    Descending,
}

impl Default for OrderDirection {
    fn default() -> Self {
        OrderDirection::Ascending
    }
}

impl From<OrderDirection> for Direction {
    fn from(direction: OrderDirection) -> Self {
        match direction {
            OrderDirection::Ascending => Direction::Ascending,
            OrderDirection::Descending => Direction::Descending,
        }
    }
}
