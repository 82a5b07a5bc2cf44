// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::hex::HexError;
use crate::types::Address;

/// Errors in the node configuration which prevent it from starting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Configured contract address is not a 20 byte hex value.
    #[error("Invalid contract address '{0}': {1}")]
    InvalidContractAddress(String, HexError),

    /// Service bus needs room for at least one message.
    #[error("Bus capacity needs to be larger than zero")]
    ZeroBusCapacity,
}

/// Configuration object holding all important variables throughout the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// URL / connection string to PostgreSQL or SQLite database.
    pub database_url: String,

    /// Maximum number of connections that the database pool should maintain.
    pub database_max_connections: u32,

    /// HTTP port, serving the log ingest endpoint and the GraphQL API (for example hosted under
    /// http://localhost:2020/graphql). Defaults to 2020.
    pub http_port: u16,

    /// Address of the notary contract whose logs get indexed.
    ///
    /// Logs emitted by any other contract are ignored. When not set, logs of every contract are
    /// indexed.
    pub contract_address: Option<String>,

    /// Maximum number of messages kept on the service bus for slow subscribers.
    pub bus_capacity: usize,
}

impl Configuration {
    /// Validates the configuration and returns the parsed contract address, if any.
    pub fn validate(&self) -> Result<Option<Address>, ConfigurationError> {
        if self.bus_capacity == 0 {
            return Err(ConfigurationError::ZeroBusCapacity);
        }

        self.contract_address
            .as_ref()
            .map(|value| {
                value
                    .parse::<Address>()
                    .map_err(|err| ConfigurationError::InvalidContractAddress(value.clone(), err))
            })
            .transpose()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            database_max_connections: 32,
            http_port: 2020,
            contract_address: None,
            bus_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Configuration, ConfigurationError};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Configuration::default().validate(), Ok(None));
    }

    #[test]
    fn contract_address_is_normalized() {
        let config = Configuration {
            contract_address: Some("0x00000000000000000000000000000000000000AB".into()),
            ..Default::default()
        };

        let address = config.validate().unwrap().unwrap();
        assert_eq!(
            address.to_string(),
            "0x00000000000000000000000000000000000000ab"
        );
    }

    #[rstest]
    #[case("0x1234")]
    #[case("not an address")]
    fn invalid_contract_address(#[case] value: &str) {
        let config = Configuration {
            contract_address: Some(value.into()),
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidContractAddress(_, _))
        ));
    }

    #[test]
    fn zero_bus_capacity() {
        let config = Configuration {
            bus_capacity: 0,
            ..Default::default()
        };

        assert_eq!(config.validate(), Err(ConfigurationError::ZeroBusCapacity));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{ "http_port": 8080, "contract_address": "0x00000000000000000000000000000000000000ab" }"#)
                .unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_max_connections, 32);
        assert!(config.contract_address.is_some());
    }
}
