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
use ledger_types::{EntryKey, OperatingMode, ValidationCount};

use crate::collab::{Acquisition, ConnectionPool, LedgerAcquire, MasterLedger, Peer, Wallet};
use crate::config::NetworkConfig;

/// The delay, in seconds, the caller should wait before invoking
/// [`NetworkStateMachine::check_state`] again.
///
/// A bare `u64` rather than `std::time::Duration`: the core has no opinion on the runtime's clock
/// or sleep primitive, only on how long to wait; the embedder's timer loop honors this value
/// directly (see the resolved discrepancy with the original's `setStateTimer` in the crate's
/// design notes).
pub type TimerDelay = u64;

/// Periodic classifier of the node's situation relative to the network.
///
/// One call to [`Self::check_state`] is one "pass": it takes a census of peers, tallies validation
/// evidence, decides whether to switch the node's view of the last-closed ledger, and refines the
/// operating mode. The machine holds only the mode and configuration across passes; the validation
/// tally is rebuilt fresh on every call.
#[derive(Clone, Debug)]
pub struct NetworkStateMachine {
    mode: OperatingMode,
    config: NetworkConfig,
}

impl NetworkStateMachine {
    pub fn new(config: NetworkConfig) -> Self { Self { mode: OperatingMode::Disconnected, config } }

    pub fn mode(&self) -> OperatingMode { self.mode }

    pub fn config(&self) -> &NetworkConfig { &self.config }

    /// Runs one pass of the state machine and returns the delay before the next pass.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = %self.mode))]
    pub fn check_state<L: MasterLedger, P: ConnectionPool, A: LedgerAcquire, W: Wallet>(
        &mut self,
        ledger: &mut L,
        pool: &mut P,
        acquire: &mut A,
        wallet: &W,
    ) -> TimerDelay {
        let local_closed = ledger.closed_ledger_hash();
        let peers = pool.peer_vector();

        if (peers.len() as u32) < self.config.network_quorum {
            if self.mode != OperatingMode::Disconnected {
                tracing::warn!(
                    peer_count = peers.len(),
                    quorum = self.config.network_quorum,
                    "peer count below quorum, forcing disconnected"
                );
            }
            self.mode = OperatingMode::Disconnected;
            return self.config.timer_disconnected_secs;
        }

        if self.mode == OperatingMode::Disconnected {
            tracing::info!("quorum satisfied, transitioning to connected");
            self.mode = OperatingMode::Connected;
        }

        let mut tally: IndexMap<EntryKey, ValidationCount> = IndexMap::new();
        for peer in &peers {
            if let Some(hash) = peer.closed_ledger_hash() {
                let count = tally.entry(hash).or_default();
                count.record_node(peer.node_public());
                if peer.is_trusted() {
                    count.trusted_validations += 1;
                } else {
                    count.untrusted_validations += 1;
                }
            }
        }
        if let Some(hash) = local_closed {
            // The local node's own view of its closed ledger is always trusted.
            let count = tally.entry(hash).or_default();
            count.record_node(wallet.node_public());
            count.trusted_validations += 1;
        }

        let consensus = tally.iter().max_by(|a, b| a.1.cmp(b.1)).map(|(hash, _)| *hash);

        let switch_ledgers = match (consensus, local_closed) {
            (Some(target), Some(local)) => target != local,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if switch_ledgers {
            let target = consensus.expect("switch_ledgers is only set when consensus is Some");

            if matches!(self.mode, OperatingMode::Tracking | OperatingMode::Full) {
                tracing::info!(%target, "ledger switch required, demoting to tracking");
                self.mode = OperatingMode::Tracking;
            }

            let mut acquisition = acquire.find_create(target);
            if acquisition.is_failed() {
                tracing::warn!(%target, "ledger acquisition failed, backing off");
                acquire.drop_ledger(target);
                return self.config.timer_acquire_failed_secs;
            }

            if !acquisition.is_complete() {
                for peer in &peers {
                    if peer.closed_ledger_hash() == Some(target) {
                        acquisition.attach_peer(peer.node_public());
                    }
                }
                return self.config.timer_acquiring_secs;
            }

            tracing::info!(%target, "ledger acquisition complete, installing as new closed ledger");
            ledger.install_closed_ledger(target);
        } else {
            self.refine_mode(&tally, local_closed);
        }

        self.config.timer_connected_secs
    }

    fn refine_mode(&mut self, tally: &IndexMap<EntryKey, ValidationCount>, local_closed: Option<EntryKey>) {
        let trusted = local_closed.and_then(|hash| tally.get(&hash)).map(|vc| vc.trusted_validations).unwrap_or(0);

        match self.mode {
            // Reaching this branch already means `switch_ledgers == false`, i.e. the local ledger
            // aligns with consensus (§4.5 step 7); no extra validation-count threshold gates this
            // promotion. Thresholds are reserved for Tracking <-> Full (§9 open-question
            // resolution).
            OperatingMode::Connected => {
                tracing::info!("local ledger aligns with consensus, promoting to tracking");
                self.mode = OperatingMode::Tracking;
            }
            OperatingMode::Tracking if self.config.ledger_full_threshold.is_met_by(trusted) => {
                tracing::info!("validation evidence crosses full-trust threshold");
                self.mode = OperatingMode::Full;
            }
            OperatingMode::Full if !self.config.ledger_full_threshold.is_met_by(trusted) => {
                tracing::info!("validation evidence dropped below full-trust threshold, demoting");
                self.mode = OperatingMode::Tracking;
            }
            _ => {}
        }
    }
}
