// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::events::errors::DecodeError;
use crate::events::raw::ParamKind;

const DOCUMENT_NOTARIZED_PARAMS: [ParamKind; 5] = [
    ParamKind::Address,
    ParamKind::Bytes,
    ParamKind::Uint256,
    ParamKind::String,
    ParamKind::String,
];

const DOCUMENT_RETRIEVED_PARAMS: [ParamKind; 3] =
    [ParamKind::Address, ParamKind::Bytes, ParamKind::Uint256];

const DOCUMENT_REVOKED_PARAMS: [ParamKind; 5] = [
    ParamKind::Address,
    ParamKind::Bytes,
    ParamKind::Uint256,
    ParamKind::String,
    ParamKind::String,
];

/// Every event emitted by the notary contract which gets indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSignature {
    /// `DocumentNotarized(owner, documentHash, timestamp, imageURI, description)`
    DocumentNotarized,

    /// `DocumentRetrieved(requester, documentHash, timestamp)`
    DocumentRetrieved,

    /// `DocumentRevoked(owner, documentHash, timestamp, description, imageURI)`
    DocumentRevoked,
}

impl EventSignature {
    /// All known signatures.
    pub const ALL: [EventSignature; 3] = [
        EventSignature::DocumentNotarized,
        EventSignature::DocumentRetrieved,
        EventSignature::DocumentRevoked,
    ];

    /// Returns the event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventSignature::DocumentNotarized => "DocumentNotarized",
            EventSignature::DocumentRetrieved => "DocumentRetrieved",
            EventSignature::DocumentRevoked => "DocumentRevoked",
        }
    }

    /// Returns the ordered parameter types this event is declared with.
    pub fn params(&self) -> &'static [ParamKind] {
        match self {
            EventSignature::DocumentNotarized => &DOCUMENT_NOTARIZED_PARAMS,
            EventSignature::DocumentRetrieved => &DOCUMENT_RETRIEVED_PARAMS,
            EventSignature::DocumentRevoked => &DOCUMENT_REVOKED_PARAMS,
        }
    }

    /// Returns the canonical signature string, for example `DocumentRetrieved(address,bytes,uint256)`.
    pub fn canonical(&self) -> String {
        let params: Vec<&str> = self.params().iter().map(ParamKind::as_str).collect();
        format!("{}({})", self.name(), params.join(","))
    }
}

impl FromStr for EventSignature {
    type Err = DecodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Tolerate whitespace between parameter types, nothing else
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

        EventSignature::ALL
            .iter()
            .find(|signature| signature.canonical() == compact)
            .copied()
            .ok_or_else(|| DecodeError::UnknownEvent(value.to_owned()))
    }
}

impl Display for EventSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::events::errors::DecodeError;

    use super::EventSignature;

    #[rstest]
    #[case(
        "DocumentNotarized(address,bytes,uint256,string,string)",
        EventSignature::DocumentNotarized
    )]
    #[case(
        "DocumentRetrieved(address, bytes, uint256)",
        EventSignature::DocumentRetrieved
    )]
    #[case(
        "DocumentRevoked(address,bytes,uint256,string,string)",
        EventSignature::DocumentRevoked
    )]
    fn parse_known_signatures(#[case] value: &str, #[case] expected: EventSignature) {
        assert_eq!(value.parse::<EventSignature>().unwrap(), expected);
    }

    #[rstest]
    #[case::unknown_name("DocumentBurned(address,bytes,uint256)")]
    #[case::wrong_abi("DocumentRetrieved(address,bytes32,uint256)")]
    #[case::name_only("DocumentRevoked")]
    fn reject_unknown_signatures(#[case] value: &str) {
        assert_eq!(
            value.parse::<EventSignature>(),
            Err(DecodeError::UnknownEvent(value.to_string()))
        );
    }

    #[test]
    fn canonical_round_trip() {
        for signature in EventSignature::ALL.iter() {
            assert_eq!(
                signature.canonical().parse::<EventSignature>().unwrap(),
                *signature
            );
        }
    }
}
