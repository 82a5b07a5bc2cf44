// SPDX-License-Identifier: AGPL-3.0-or-later

//! Canonical text representation of binary values.
//!
//! Every hash-like value leaves the indexer as lowercase hex with a fixed `0x` prefix. Empty byte
//! sequences are rendered as a bare `0x` so equality queries against them stay well-defined.
use std::convert::TryInto;

/// Prefix of every hex string produced by the indexer.
pub const HEX_PREFIX: &str = "0x";

/// Errors which occur when parsing hex text into bytes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HexError {
    /// Text is not valid hex, for example because of an odd length or a non-hex character.
    #[error("invalid hex string '{value}': {source}")]
    InvalidHex {
        /// The rejected input.
        value: String,

        /// Reason reported by the hex decoder.
        source: hex::FromHexError,
    },

    /// Hex was valid but did not decode to the expected number of bytes.
    #[error("expected {expected} bytes, found {actual}")]
    InvalidLength {
        /// Number of bytes the value must have.
        expected: usize,

        /// Number of bytes which were found.
        actual: usize,
    },
}

/// Converts raw bytes into their canonical display form.
pub fn to_display_hex(raw: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(raw))
}

/// Parses hex text into bytes.
///
/// The `0x` prefix is optional and both upper- and lowercase digits are accepted.
pub fn from_hex(value: &str) -> Result<Vec<u8>, HexError> {
    let digits = value
        .strip_prefix(HEX_PREFIX)
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    hex::decode(digits).map_err(|source| HexError::InvalidHex {
        value: value.to_owned(),
        source,
    })
}

/// Parses hex text into a fixed-size byte array.
pub fn from_hex_fixed<const N: usize>(value: &str) -> Result<[u8; N], HexError> {
    let bytes = from_hex(value)?;
    let actual = bytes.len();

    bytes.try_into().map_err(|_| HexError::InvalidLength {
        expected: N,
        actual,
    })
}

/// Re-renders any accepted hex text in canonical form.
pub fn normalize_hex(value: &str) -> Result<String, HexError> {
    Ok(to_display_hex(&from_hex(value)?))
}
