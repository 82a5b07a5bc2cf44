// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rows of the record tables as stored in the database.
mod document_notarized;
mod document_retrieved;
mod document_revoked;
mod utils;

pub use document_notarized::DocumentNotarizedRow;
pub use document_retrieved::DocumentRetrievedRow;
pub use document_revoked::DocumentRevokedRow;
