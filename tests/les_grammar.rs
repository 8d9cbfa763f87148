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

//! Exercises the entry action grammar (a single ledger entry's lifecycle) through the public API,
//! independent of the internal representation in `les.rs`.

use ledger_types::{EntryAction, EntryKey, SerializedEntry};
use ledgercore::LedgerEntrySet;

fn entry(byte: u8, payload: u8) -> SerializedEntry {
    SerializedEntry::new(EntryKey::from_byte_array([byte; 32]), 1, vec![payload])
}

#[test]
fn cache_then_recache_replaces_payload() {
    let mut les = LedgerEntrySet::new();
    let e = entry(1, 0xAA);
    les.entry_cache(e.clone()).unwrap();
    assert_eq!(les.has_entry(e.key()), EntryAction::Cached);

    les.entry_cache(entry(1, 0xBB)).unwrap();
    let (got, action) = les.get_entry(e.key());
    assert_eq!(got.unwrap().payload, vec![0xBB]);
    assert_eq!(action, EntryAction::Cached);
}

#[test]
fn create_then_modify_stays_create_with_latest_payload() {
    let mut les = LedgerEntrySet::new();
    let e = entry(2, 0x01);
    les.entry_create(e.clone()).unwrap();
    les.entry_modify(entry(2, 0x02)).unwrap();

    assert_eq!(les.has_entry(e.key()), EntryAction::Create);
    let (got, _) = les.get_entry(e.key());
    assert_eq!(got.unwrap().payload, vec![0x02]);
}

#[test]
fn create_then_delete_leaves_no_trace() {
    let mut les = LedgerEntrySet::new();
    let e = entry(3, 0x00);
    les.entry_create(e.clone()).unwrap();
    les.entry_delete(e.clone()).unwrap();
    assert_eq!(les.has_entry(e.key()), EntryAction::None);
}

#[test]
fn modify_then_create_is_a_grammar_violation() {
    let mut les = LedgerEntrySet::new();
    let e = entry(4, 0x00);
    les.entry_modify(e.clone()).unwrap();
    let err = les.entry_create(e).unwrap_err();
    assert_eq!(err.current, EntryAction::Modify);
}

#[test]
fn delete_is_idempotent() {
    let mut les = LedgerEntrySet::new();
    let e = entry(5, 0x00);
    les.entry_delete(e.clone()).unwrap();
    les.entry_delete(e.clone()).unwrap();
    assert_eq!(les.has_entry(e.key()), EntryAction::Delete);
}

#[test]
fn illegal_ops_never_mutate_the_stored_action() {
    let mut les = LedgerEntrySet::new();
    let e = entry(6, 0x00);
    les.entry_delete(e.clone()).unwrap();

    assert!(les.entry_cache(e.clone()).is_err());
    assert!(les.entry_create(e.clone()).is_err());
    assert!(les.entry_modify(e.clone()).is_err());
    assert_eq!(les.has_entry(e.key()), EntryAction::Delete);
}
