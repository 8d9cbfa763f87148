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

use core::error::Error;

use ledger_types::{EntryKey, NodeId, RelayFrame, ResultCode, TransactionStatus};

/// A transaction as seen by the intake path: its wire bytes plus enough of its parsed body to
/// drive dedup and replay (`id`, `account_sequence`), plus the terminal status intake last
/// assigned it.
///
/// `status`/`set_status` exist so that a transaction fetched back out of the
/// [`MasterTransaction`] store on a duplicate submission carries forward whatever outcome it was
/// given the first time (`Included`, `Held`, ...) rather than losing it on the round trip.
pub trait Transaction: Clone {
    fn id(&self) -> EntryKey;
    fn account_sequence(&self) -> u32;
    fn raw(&self) -> Vec<u8>;
    fn verify_signature(&self) -> bool;
    fn status(&self) -> TransactionStatus;
    fn set_status(&mut self, status: TransactionStatus);
}

/// Collaborator exposing the node's current and last-closed ledgers and applying transactions to
/// them.
///
/// This crate treats `do_transaction` as synchronous; a real node's implementation may itself run
/// an [`crate::les::LedgerEntrySet`] internally to evaluate the transaction against open state.
pub trait MasterLedger {
    type Tx: Transaction;
    type IoFault: Error;

    fn current_ledger_index(&self) -> u32;
    fn closed_ledger_hash(&self) -> Option<EntryKey>;

    fn do_transaction(&mut self, tx: &Self::Tx) -> Result<ResultCode, Self::IoFault>;

    fn add_held_transaction(&mut self, tx: Self::Tx);

    /// Installs `hash` as the new last-closed ledger, as requested by the operating mode FSM once
    /// an acquisition for it completes.
    fn install_closed_ledger(&mut self, hash: EntryKey);
}

/// Collaborator recording canonical transaction copies and answering dedup lookups.
pub trait MasterTransaction<Tx: Transaction> {
    /// Looks up a transaction by id, optionally inserting a placeholder for it if absent.
    fn fetch(&mut self, id: EntryKey, create: bool) -> Option<Tx>;

    fn canonicalize(&mut self, tx: &Tx, commit: bool);
}

/// A network peer as observed by the operating mode FSM.
pub trait Peer {
    fn closed_ledger_hash(&self) -> Option<EntryKey>;
    fn node_public(&self) -> NodeId;

    /// Whether this peer is on the operator's configured trust list. Validations from trusted
    /// peers are tallied separately from, and weigh more than, validations from the rest of the
    /// network (see the strict ordering on `ValidationCount`).
    fn is_trusted(&self) -> bool;
}

/// Collaborator exposing the set of currently connected peers and relaying accepted transactions.
pub trait ConnectionPool {
    type Peer: Peer;

    fn peer_vector(&self) -> Vec<Self::Peer>;

    /// Relays `frame` to all peers except `source`, if given.
    fn relay_message(&mut self, source: Option<NodeId>, frame: RelayFrame);
}

/// A ledger fetch in progress against peers.
pub trait Acquisition {
    fn is_failed(&self) -> bool;
    fn is_complete(&self) -> bool;
    fn attach_peer(&mut self, node: NodeId);
}

/// Registry of in-progress ledger acquisitions, keyed by target hash.
pub trait LedgerAcquire {
    type Acquisition: Acquisition;

    fn find_create(&mut self, hash: EntryKey) -> Self::Acquisition;
    fn drop_ledger(&mut self, hash: EntryKey);
}

/// Collaborator exposing the local node's own identity.
pub trait Wallet {
    fn node_public(&self) -> NodeId;
}
