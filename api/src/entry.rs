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

use crate::EntryKey;

/// An immutable, serializable record representing one ledger object (an account, an order, or any
/// other entry kept in the global ledger state).
///
/// `SerializedEntry` is logically value-typed: the ledger entry set shares instances across reads
/// until a mutation requires it to clone one (see the copy-on-read rule on
/// `LedgerEntrySet::get_entry` in `ledgercore`). The concrete field layout of an account or order
/// is owned by the embedding application; this crate only needs the key and an opaque payload to
/// implement the mutation grammar.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerializedEntry {
    key: EntryKey,
    /// Application-defined tag identifying the kind of ledger object (account, order, ...).
    pub entry_type: u16,
    /// Opaque, application-defined encoding of the entry's fields.
    pub payload: Vec<u8>,
}

impl SerializedEntry {
    pub fn new(key: EntryKey, entry_type: u16, payload: Vec<u8>) -> Self { Self { key, entry_type, payload } }

    #[inline]
    pub fn key(&self) -> EntryKey { self.key }
}

/// The action the ledger entry set is currently tracking for a given entry.
///
/// `None` is a sentinel rather than being folded into an `Option<EntryAction>` so that absence
/// queries (`has_entry`) and presence queries return the same type at the call site.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntryAction {
    /// Sentinel returned when an entry is absent from the set.
    #[default]
    None,
    /// Entry was read for reference only; unchanged.
    Cached,
    /// Entry will be inserted by this evaluation.
    Create,
    /// Entry existed and will be updated.
    Modify,
    /// Entry existed and will be removed.
    Delete,
}

/// The mutation requested against an entry; the subset of [`EntryAction`] that can be asked for
/// (no one ever *requests* `None` — it is only ever observed).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntryOp {
    Cache,
    Create,
    Modify,
    Delete,
}

impl core::fmt::Display for EntryOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            EntryOp::Cache => "cache",
            EntryOp::Create => "create",
            EntryOp::Modify => "modify",
            EntryOp::Delete => "delete",
        };
        f.write_str(s)
    }
}

impl core::fmt::Display for EntryAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            EntryAction::None => "none",
            EntryAction::Cached => "cached",
            EntryAction::Create => "create",
            EntryAction::Modify => "modify",
            EntryAction::Delete => "delete",
        };
        f.write_str(s)
    }
}
