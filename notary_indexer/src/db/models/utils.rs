// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use crate::db::errors::SqlStoreError;

/// Converts an unsigned value into its signed column representation.
pub fn to_i64(table: &'static str, column: &str, value: u64) -> Result<i64, SqlStoreError> {
    i64::try_from(value).map_err(|_| {
        SqlStoreError::InvalidRow(table, format!("column {} value {} out of range", column, value))
    })
}

pub fn to_u64(table: &'static str, value: i64) -> Result<u64, SqlStoreError> {
    u64::try_from(value)
        .map_err(|_| SqlStoreError::InvalidRow(table, format!("negative integer {}", value)))
}

pub fn to_u32(table: &'static str, value: i64) -> Result<u32, SqlStoreError> {
    u32::try_from(value)
        .map_err(|_| SqlStoreError::InvalidRow(table, format!("log index {} out of range", value)))
}

/// Parses a text column into its typed value.
pub fn parse_column<T>(table: &'static str, column: &str, value: &str) -> Result<T, SqlStoreError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|err: T::Err| {
        SqlStoreError::InvalidRow(table, format!("column {} '{}': {}", column, value, err))
    })
}

#[cfg(test)]
mod tests {
    use crate::db::errors::SqlStoreError;

    use super::{to_i64, to_u64};

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(to_i64("t", "block_number", 42).unwrap(), 42);
        assert_eq!(
            to_i64("t", "block_number", i64::MAX as u64).unwrap(),
            i64::MAX
        );
        assert!(matches!(
            to_i64("t", "block_number", u64::MAX),
            Err(SqlStoreError::InvalidRow("t", _))
        ));
        assert!(to_u64("t", -1).is_err());
    }
}
