// SPDX-License-Identifier: AGPL-3.0-or-later

//! GraphQL representations of the stored records.
mod document_notarized;
mod document_retrieved;
mod document_revoked;

pub use document_notarized::DocumentNotarizedObject;
pub use document_retrieved::DocumentRetrievedObject;
pub use document_revoked::DocumentRevokedObject;
