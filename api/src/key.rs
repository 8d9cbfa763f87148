// SONIC: Standard library for formally-verifiable distributed contracts
//
// SPDX-License-Identifier: Apache-2.0
//
// Designed in 2019-2025 by Dr Maxim Orlovsky <orlovsky@ubideco.org>
// Written in 2024-2025 by Dr Maxim Orlovsky <orlovsky@ubideco.org>
//
// Copyright (C) 2019-2024 LNP/BP Standards Association, Switzerland.
// Copyright (C) 2024-2025 Laboratories for Ubiquitous Deterministic Computing (UBIDECO),
//                         Institute for Distributed and Cognitive Systems (InDCS), Switzerland.
// Copyright (C) 2019-2025 Dr Maxim Orlovsky.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use amplify::Bytes32;

/// Opaque 256-bit identifier of a ledger entry (an account, an order, or any other object kept in
/// the global ledger state).
///
/// Equality and hashing are total over the full 32 bytes; no substructure of the key is meaningful
/// to this crate.
#[derive(Wrapper, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From)]
#[wrapper(Deref, AsSlice, BorrowSlice)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct EntryKey(
    #[from]
    #[from([u8; 32])]
    Bytes32,
);

impl EntryKey {
    pub const fn from_byte_array(bytes: [u8; 32]) -> Self { Self(Bytes32::from_array(bytes)) }

    pub fn to_byte_array(&self) -> [u8; 32] { *self.0.as_array() }
}

mod _hex {
    use core::fmt::{self, Display, Formatter, LowerHex, UpperHex};
    use core::str::FromStr;

    use super::EntryKey;

    impl Display for EntryKey {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { LowerHex::fmt(self, f) }
    }

    impl LowerHex for EntryKey {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            for byte in self.0.as_slice() {
                write!(f, "{byte:02x}")?;
            }
            Ok(())
        }
    }

    impl UpperHex for EntryKey {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            for byte in self.0.as_slice() {
                write!(f, "{byte:02X}")?;
            }
            Ok(())
        }
    }

    /// Error parsing an [`EntryKey`] from its hex representation.
    #[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
    #[display(doc_comments)]
    pub enum ParseKeyError {
        /// invalid hex digit in ledger entry key.
        InvalidHex,
        /// ledger entry key must be exactly 32 bytes, got {0}.
        InvalidLength(usize),
    }

    impl FromStr for EntryKey {
        type Err = ParseKeyError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let s = s.strip_prefix("0x").unwrap_or(s);
            if s.len() != 64 {
                return Err(ParseKeyError::InvalidLength(s.len() / 2));
            }
            let mut bytes = [0u8; 32];
            for (i, byte) in bytes.iter_mut().enumerate() {
                let hi = s.as_bytes()[i * 2];
                let lo = s.as_bytes()[i * 2 + 1];
                let hi = (hi as char).to_digit(16).ok_or(ParseKeyError::InvalidHex)?;
                let lo = (lo as char).to_digit(16).ok_or(ParseKeyError::InvalidHex)?;
                *byte = (hi as u8) << 4 | lo as u8;
            }
            Ok(EntryKey::from_byte_array(bytes))
        }
    }
}
pub use _hex::ParseKeyError;

/// Fixed-width public-key identifier of a network peer.
///
/// This crate treats a [`NodeId`] as an opaque, totally ordered byte string used only to
/// byte-wise compare peers for the validation tally tie-breaker (§3, §9 of the design). It
/// performs no cryptographic validation of the underlying public key; that is the job of the
/// out-of-scope signature subsystem.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NodeId(
    #[from]
    [u8; 33],
);

impl NodeId {
    pub const fn from_byte_array(bytes: [u8; 33]) -> Self { Self(bytes) }

    pub fn to_byte_array(&self) -> [u8; 33] { self.0 }

    pub fn as_slice(&self) -> &[u8] { &self.0 }
}

impl core::ops::Deref for NodeId {
    type Target = [u8; 33];

    fn deref(&self) -> &Self::Target { &self.0 }
}

mod _nodeid_hex {
    use core::fmt::{self, Display, Formatter, LowerHex};

    use super::NodeId;

    impl Display for NodeId {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { LowerHex::fmt(self, f) }
    }

    impl LowerHex for NodeId {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            for byte in self.0 {
                write!(f, "{byte:02x}")?;
            }
            Ok(())
        }
    }
}
