// SPDX-License-Identifier: AGPL-3.0-or-later

//! Chain value types and their canonical text forms.
mod address;
mod entity_id;
pub mod hex;
mod transaction_hash;

pub use address::{Address, ADDRESS_LEN};
pub use entity_id::{EntityId, LogIndex, ENTITY_ID_LEN};
pub use transaction_hash::{TransactionHash, TRANSACTION_HASH_LEN};
