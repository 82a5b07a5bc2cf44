// SPDX-License-Identifier: AGPL-3.0-or-later

//! Scalars exposing chain values as strings.
mod big_int;
mod bytes;

pub use big_int::BigInt;
pub use bytes::Bytes;
