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

/// Outcome of routing a submitted transaction through intake.
///
/// Per the propagation policy (design §7), all of these are *statuses*, not errors: intake only
/// raises a true `Err` for I/O-class faults from the master ledger (`ResultCode::Failed`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum TransactionStatus {
    /// Not yet classified.
    #[default]
    New,
    /// Applied to the current ledger and queued for relay.
    Included,
    /// Sequence number is ahead of the account; queued for later replay.
    Held,
    /// Duplicate, or applies to a sequence/ledger already superseded.
    Obsolete,
    /// Failed signature check, or the master ledger returned an unrecognized result code.
    Invalid,
}

/// Result codes returned by the `MasterLedger::do_transaction` collaborator.
///
/// Named after the transaction-engine result codes of the originating design (`terSUCCESS`,
/// `terPRE_SEQ`, ...); kept coarse because the fine-grained validity rules a concrete ledger
/// object model would add (insufficient balance, bad amount, and so on) are out of this crate's
/// scope — they would all classify as `Invalid` here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ResultCode {
    Success,
    PreSeq,
    PastSeq,
    PastLedger,
    Failed,
    Other(u16),
}

/// Status carried in a relayed transaction frame. Only `Current` is produced by this crate today;
/// the variant exists (rather than a bare unit struct) because the wire format this frame models
/// carries a status discriminant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum FrameStatus {
    #[default]
    Current,
}

/// Contents of the transaction message relayed to peers once a transaction is accepted.
///
/// Serialization of this frame to the wire is an out-of-scope concern (§1); this type captures
/// only the fields the design assigns (§4.4, §6).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelayFrame {
    pub raw_transaction: Vec<u8>,
    pub status: FrameStatus,
    /// Wall-clock receive time, in seconds.
    pub receive_timestamp: u64,
    /// Ledger index at which acceptance is hypothesized.
    pub ledger_index_possible: u32,
}

impl RelayFrame {
    pub fn new(raw_transaction: Vec<u8>, receive_timestamp: u64, ledger_index_possible: u32) -> Self {
        Self { raw_transaction, status: FrameStatus::Current, receive_timestamp, ledger_index_possible }
    }
}
