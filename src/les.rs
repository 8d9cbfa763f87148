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

use indexmap::IndexMap;
use ledger_types::{EntryAction, EntryKey, EntryOp, SerializedEntry};

/// Illegal request against an entry's current action.
///
/// Raised when a caller asks for a transition the grammar does not allow (see the table on
/// [`LedgerEntrySet`]); this is a programmer-bug class of error in the transaction engine above
/// and is always surfaced, never silently absorbed.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
#[display("illegal ledger-entry transition: {requested} after {current}")]
pub struct GrammarViolation {
    pub current: EntryAction,
    pub requested: EntryOp,
}

#[derive(Clone, Debug)]
struct Row {
    entry: SerializedEntry,
    action: EntryAction,
    seq: u32,
}

/// A scratch workspace accumulating tentative mutations to a set of ledger entries.
///
/// Rows are logically copy-on-write across [`LedgerEntrySet::duplicate`] snapshots: a row's `seq`
/// tracks the generation it was last written at, and [`LedgerEntrySet::get_entry`] clones a row
/// whose `seq` lags the set's own `seq` before returning it, so that a child set's subsequent
/// writes never become visible through the parent.
///
/// Mutations are constrained by a small, fixed grammar (see the table in the module docs of the
/// crate root): most illegal requests raise [`GrammarViolation`] rather than being coalesced.
#[derive(Clone, Debug, Default)]
pub struct LedgerEntrySet {
    entries: IndexMap<EntryKey, Row>,
    seq: u32,
}

impl LedgerEntrySet {
    pub fn new() -> Self { Self::default() }

    pub fn seq(&self) -> u32 { self.seq }

    /// Returns a new set sharing this set's entries, at the next generation.
    ///
    /// The parent remains fully usable; per-row copy-on-write isolation is enforced lazily on
    /// [`Self::get_entry`], not here.
    pub fn duplicate(&self) -> Self { Self { entries: self.entries.clone(), seq: self.seq + 1 } }

    /// Overwrites `self` with `other`'s entries and generation.
    pub fn set_to(&mut self, other: &Self) {
        self.entries = other.entries.clone();
        self.seq = other.seq;
    }

    /// Exchanges entries and generation with `other`.
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.entries, &mut other.entries);
        core::mem::swap(&mut self.seq, &mut other.seq);
    }

    /// Returns the action tracked for `key` without performing copy-on-read isolation.
    pub fn has_entry(&self, key: EntryKey) -> EntryAction {
        self.entries.get(&key).map(|row| row.action).unwrap_or_default()
    }

    /// Returns the entry and action tracked for `key`, promoting the row to the set's current
    /// generation first if it still belongs to an older (parent) snapshot.
    pub fn get_entry(&mut self, key: EntryKey) -> (Option<SerializedEntry>, EntryAction) {
        let seq = self.seq;
        match self.entries.get_mut(&key) {
            None => (None, EntryAction::None),
            Some(row) => {
                if row.seq < seq {
                    row.seq = seq;
                }
                (Some(row.entry.clone()), row.action)
            }
        }
    }

    /// Records a read-only cache of `entry`.
    pub fn entry_cache(&mut self, entry: SerializedEntry) -> Result<(), GrammarViolation> {
        self.apply(entry, EntryOp::Cache)
    }

    /// Records the creation of `entry`.
    pub fn entry_create(&mut self, entry: SerializedEntry) -> Result<(), GrammarViolation> {
        self.apply(entry, EntryOp::Create)
    }

    /// Records a modification to `entry`.
    pub fn entry_modify(&mut self, entry: SerializedEntry) -> Result<(), GrammarViolation> {
        self.apply(entry, EntryOp::Modify)
    }

    /// Records the deletion of `entry`.
    pub fn entry_delete(&mut self, entry: SerializedEntry) -> Result<(), GrammarViolation> {
        self.apply(entry, EntryOp::Delete)
    }

    fn apply(&mut self, entry: SerializedEntry, op: EntryOp) -> Result<(), GrammarViolation> {
        let key = entry.key();
        let seq = self.seq;
        let current = self.has_entry(key);

        let next = match (current, op) {
            (EntryAction::None, EntryOp::Cache) => EntryAction::Cached,
            (EntryAction::None, EntryOp::Create) => EntryAction::Create,
            (EntryAction::None, EntryOp::Modify) => EntryAction::Modify,
            (EntryAction::None, EntryOp::Delete) => EntryAction::Delete,

            (EntryAction::Cached, EntryOp::Cache) => EntryAction::Cached,
            (EntryAction::Cached, EntryOp::Modify) => EntryAction::Modify,
            (EntryAction::Cached, EntryOp::Delete) => EntryAction::Delete,

            (EntryAction::Create, EntryOp::Modify) => EntryAction::Create,
            (EntryAction::Create, EntryOp::Delete) => {
                self.entries.shift_remove(&key);
                return Ok(());
            }

            (EntryAction::Modify, EntryOp::Modify) => EntryAction::Modify,
            (EntryAction::Modify, EntryOp::Delete) => EntryAction::Delete,

            (EntryAction::Delete, EntryOp::Delete) => EntryAction::Delete,

            (current, requested) => {
                tracing::error!(?current, %requested, "grammar violation in ledger entry set");
                return Err(GrammarViolation { current, requested });
            }
        };

        self.entries.insert(key, Row { entry, action: next, seq });
        Ok(())
    }
}
