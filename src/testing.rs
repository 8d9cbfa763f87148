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

//! Hand-rolled in-memory fakes for the collaborator traits in [`crate::collab`], sufficient to
//! drive the FSM and transaction intake in tests without a real network or ledger store. Not a
//! persistence engine; not part of the crate's public API outside of tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use indexmap::IndexMap;
use ledger_types::{EntryKey, NodeId, RelayFrame, ResultCode, TransactionStatus};

use crate::collab::{Acquisition, ConnectionPool, LedgerAcquire, MasterLedger, MasterTransaction, Peer, Transaction, Wallet};

#[derive(Clone, Debug)]
pub struct FakeTransaction {
    pub id: EntryKey,
    pub account_sequence: u32,
    pub raw: Vec<u8>,
    pub signature_valid: bool,
    pub status: TransactionStatus,
}

impl FakeTransaction {
    pub fn new(id: EntryKey, account_sequence: u32) -> Self {
        Self {
            id,
            account_sequence,
            raw: id.to_byte_array().to_vec(),
            signature_valid: true,
            status: TransactionStatus::New,
        }
    }

    pub fn with_bad_signature(mut self) -> Self {
        self.signature_valid = false;
        self
    }
}

impl Transaction for FakeTransaction {
    fn id(&self) -> EntryKey { self.id }

    fn account_sequence(&self) -> u32 { self.account_sequence }

    fn raw(&self) -> Vec<u8> { self.raw.clone() }

    fn verify_signature(&self) -> bool { self.signature_valid }

    fn status(&self) -> TransactionStatus { self.status }

    fn set_status(&mut self, status: TransactionStatus) { self.status = status; }
}

/// A ledger that applies transactions by comparing `account_sequence` against a fixed expectation,
/// exactly the rule `doTransaction` classifies on in the design this crate follows.
#[derive(Clone, Debug)]
pub struct FakeLedger {
    pub expected_sequence: u32,
    pub current_ledger_index: u32,
    pub closed_ledger_hash: Option<EntryKey>,
    pub held: Vec<FakeTransaction>,
    pub force_result: Option<ResultCode>,
}

impl FakeLedger {
    pub fn new(expected_sequence: u32) -> Self {
        Self {
            expected_sequence,
            current_ledger_index: 1,
            closed_ledger_hash: None,
            held: Vec::new(),
            force_result: None,
        }
    }
}

impl MasterLedger for FakeLedger {
    type Tx = FakeTransaction;
    type IoFault = Infallible;

    fn current_ledger_index(&self) -> u32 { self.current_ledger_index }

    fn closed_ledger_hash(&self) -> Option<EntryKey> { self.closed_ledger_hash }

    fn do_transaction(&mut self, tx: &Self::Tx) -> Result<ResultCode, Self::IoFault> {
        if let Some(forced) = self.force_result {
            return Ok(forced);
        }
        let result = match tx.account_sequence.cmp(&self.expected_sequence) {
            core::cmp::Ordering::Equal => ResultCode::Success,
            core::cmp::Ordering::Greater => ResultCode::PreSeq,
            core::cmp::Ordering::Less => ResultCode::PastSeq,
        };
        Ok(result)
    }

    fn add_held_transaction(&mut self, tx: Self::Tx) { self.held.push(tx); }

    fn install_closed_ledger(&mut self, hash: EntryKey) { self.closed_ledger_hash = Some(hash); }
}

#[derive(Clone, Debug, Default)]
pub struct FakeStore {
    known: HashMap<EntryKey, FakeTransaction>,
    pub canonicalized: Vec<EntryKey>,
}

impl MasterTransaction<FakeTransaction> for FakeStore {
    fn fetch(&mut self, id: EntryKey, create: bool) -> Option<FakeTransaction> {
        let existing = self.known.get(&id).cloned();
        if existing.is_none() && create {
            // Placeholder insertion is a no-op here: this fake only needs dedup lookups, not a
            // real placeholder record.
        }
        existing
    }

    fn canonicalize(&mut self, tx: &FakeTransaction, _commit: bool) {
        self.known.insert(tx.id, tx.clone());
        self.canonicalized.push(tx.id);
    }
}

#[derive(Clone, Debug)]
pub struct FakePeer {
    node: NodeId,
    closed_ledger_hash: Option<EntryKey>,
    trusted: bool,
}

impl FakePeer {
    /// Constructs a trusted peer; use [`Self::untrusted`] for the other kind.
    pub fn new(node: NodeId, closed_ledger_hash: Option<EntryKey>) -> Self {
        Self { node, closed_ledger_hash, trusted: true }
    }

    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }
}

impl Peer for FakePeer {
    fn closed_ledger_hash(&self) -> Option<EntryKey> { self.closed_ledger_hash }

    fn node_public(&self) -> NodeId { self.node }

    fn is_trusted(&self) -> bool { self.trusted }
}

#[derive(Clone, Debug, Default)]
pub struct FakePool {
    peers: Vec<FakePeer>,
    pub relayed: Vec<(Option<NodeId>, RelayFrame)>,
}

impl FakePool {
    pub fn new(peers: Vec<FakePeer>) -> Self { Self { peers, relayed: Vec::new() } }
}

impl ConnectionPool for FakePool {
    type Peer = FakePeer;

    fn peer_vector(&self) -> Vec<Self::Peer> { self.peers.clone() }

    fn relay_message(&mut self, source: Option<NodeId>, frame: RelayFrame) { self.relayed.push((source, frame)); }
}

#[derive(Clone, Debug, Default)]
pub struct FakeAcquisition {
    failed: bool,
    complete: bool,
    attached: Rc<RefCell<Vec<NodeId>>>,
}

impl Acquisition for FakeAcquisition {
    fn is_failed(&self) -> bool { self.failed }

    fn is_complete(&self) -> bool { self.complete }

    fn attach_peer(&mut self, node: NodeId) { self.attached.borrow_mut().push(node); }
}

/// Registry of acquisitions keyed by target hash. Each hash's failed/complete flags are
/// preconfigured by the test via [`Self::set_outcome`] before the FSM pass that should observe
/// them; attached peers accumulate across calls and are inspected with [`Self::attached_peers`].
#[derive(Clone, Debug, Default)]
pub struct FakeAcquire {
    outcomes: IndexMap<EntryKey, (bool, bool)>,
    acquisitions: IndexMap<EntryKey, Rc<RefCell<Vec<NodeId>>>>,
}

impl FakeAcquire {
    pub fn set_outcome(&mut self, hash: EntryKey, failed: bool, complete: bool) {
        self.outcomes.insert(hash, (failed, complete));
    }

    pub fn attached_peers(&self, hash: EntryKey) -> Vec<NodeId> {
        self.acquisitions.get(&hash).map(|a| a.borrow().clone()).unwrap_or_default()
    }
}

impl LedgerAcquire for FakeAcquire {
    type Acquisition = FakeAcquisition;

    fn find_create(&mut self, hash: EntryKey) -> Self::Acquisition {
        let (failed, complete) = self.outcomes.get(&hash).copied().unwrap_or((false, false));
        let attached = self.acquisitions.entry(hash).or_default().clone();
        FakeAcquisition { failed, complete, attached }
    }

    fn drop_ledger(&mut self, hash: EntryKey) {
        self.acquisitions.shift_remove(&hash);
        self.outcomes.shift_remove(&hash);
    }
}

#[derive(Clone, Debug)]
pub struct FakeWallet {
    node: NodeId,
}

impl FakeWallet {
    pub fn new(node: NodeId) -> Self { Self { node } }
}

impl Wallet for FakeWallet {
    fn node_public(&self) -> NodeId { self.node }
}
