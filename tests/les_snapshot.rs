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

//! Exercises a sequence of state changes across a `duplicate()`-produced snapshot, checking that
//! isolation holds regardless of how many (legal) mutations happen on either branch.

use ledger_types::{EntryAction, EntryKey, SerializedEntry};
use ledgercore::LedgerEntrySet;
use proptest::prelude::*;

fn entry(byte: u8, payload: u8) -> SerializedEntry {
    SerializedEntry::new(EntryKey::from_byte_array([byte; 32]), 1, vec![payload])
}

#[test]
fn duplicate_is_isolated_from_further_parent_mutation() {
    let mut a = LedgerEntrySet::new();
    let shared = entry(1, 0x01);
    a.entry_cache(shared.clone()).unwrap();

    let mut b = a.duplicate();
    assert_eq!(b.seq(), a.seq() + 1);

    // mutate both sides after the fork
    a.entry_modify(entry(1, 0x02)).unwrap();
    b.entry_modify(entry(1, 0x03)).unwrap();

    let (a_got, a_action) = a.get_entry(shared.key());
    let (b_got, b_action) = b.get_entry(shared.key());
    assert_eq!(a_got.unwrap().payload, vec![0x02]);
    assert_eq!(b_got.unwrap().payload, vec![0x03]);
    assert_eq!(a_action, EntryAction::Modify);
    assert_eq!(b_action, EntryAction::Modify);
}

#[test]
fn get_entry_promotes_seq_and_returns_distinct_instance() {
    let mut a = LedgerEntrySet::new();
    let e = entry(2, 0xFF);
    a.entry_cache(e.clone()).unwrap();

    let mut b = a.duplicate();
    let (before, _) = b.get_entry(e.key());
    b.entry_modify(entry(2, 0xAB)).unwrap();
    let (after, _) = b.get_entry(e.key());

    assert_ne!(before.unwrap().payload, after.unwrap().payload);
    // the parent's row must remain untouched by the child's promotion and mutation
    let (a_entry, a_action) = a.get_entry(e.key());
    assert_eq!(a_entry.unwrap().payload, vec![0xFF]);
    assert_eq!(a_action, EntryAction::Cached);
}

#[derive(Clone, Debug)]
enum Op {
    Cache(u8),
    Modify(u8),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![(any::<u8>()).prop_map(Op::Cache), (any::<u8>()).prop_map(Op::Modify)],
        0..16,
    )
}

proptest! {
    /// For arbitrary sequences of legal mutations on a duplicated branch, the parent's view of a
    /// key present before the fork never changes.
    #[test]
    fn arbitrary_mutation_sequences_preserve_parent_snapshot(ops in arb_ops()) {
        let mut a = LedgerEntrySet::new();
        let key = EntryKey::from_byte_array([9; 32]);
        a.entry_cache(SerializedEntry::new(key, 1, vec![0])).unwrap();

        let mut b = a.duplicate();
        for op in ops {
            // Not every op is legal from every state the grammar may have reached (e.g. `cache`
            // after `modify` is refused); a refusal is a correct, non-mutating outcome here, so we
            // only care that the parent snapshot stays intact regardless of which ops succeeded.
            match op {
                Op::Cache(p) => { let _ = b.entry_cache(SerializedEntry::new(key, 1, vec![p])); }
                Op::Modify(p) => { let _ = b.entry_modify(SerializedEntry::new(key, 1, vec![p])); }
            }
        }

        let (parent_entry, parent_action) = a.get_entry(key);
        prop_assert_eq!(parent_entry.unwrap().payload, vec![0]);
        prop_assert_eq!(parent_action, EntryAction::Cached);
    }
}
