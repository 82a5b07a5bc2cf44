// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::hex::{from_hex_fixed, to_display_hex, HexError};

/// Length of an account or contract address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Account or contract address on the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Returns an address from its raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = HexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(from_hex_fixed::<ADDRESS_LEN>(value)?))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_display_hex(&self.0))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::types::hex::HexError;

    use super::Address;

    #[test]
    fn display_is_lowercase() {
        let address: Address = "0x00000000000000000000000000000000000000AB".parse().unwrap();
        assert_eq!(
            address.to_string(),
            "0x00000000000000000000000000000000000000ab"
        );
    }

    #[rstest]
    #[case::too_short("0x0001", HexError::InvalidLength { expected: 20, actual: 2 })]
    #[case::too_long(
        "0x000000000000000000000000000000000000000001",
        HexError::InvalidLength { expected: 20, actual: 21 }
    )]
    fn invalid_length(#[case] value: &str, #[case] expected: HexError) {
        assert_eq!(value.parse::<Address>().unwrap_err(), expected);
    }

    #[test]
    fn serde_as_string() {
        let address: Address =
            serde_json::from_str("\"0xA16081F360E3847006DB660BAE1C6D1B2E17EC2A\"").unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            "\"0xa16081f360e3847006db660bae1c6d1b2e17ec2a\""
        );
    }
}
