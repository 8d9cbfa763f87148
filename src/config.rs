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

/// Minimum evidence required before the FSM refines its mode past `Connected`.
///
/// Expressed as raw counts rather than a fraction of the peer set: the mode-refinement thresholds
/// in the original are policy hooks with no canonical formula, so this crate takes the simplest
/// faithful reading (an absolute validation count) and leaves anything more elaborate to the
/// embedder.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationThreshold {
    pub trusted_validations: u32,
}

impl ValidationThreshold {
    pub const fn new(trusted_validations: u32) -> Self { Self { trusted_validations } }

    pub fn is_met_by(&self, trusted_validations: u32) -> bool { trusted_validations >= self.trusted_validations }
}

/// Values the operating mode state machine and transaction intake are parameterized over.
///
/// Reading this from a file, environment, or RPC call is out of scope for this crate; an embedder
/// constructs one (or uses [`NetworkConfig::default`]) and passes it into
/// [`crate::fsm::NetworkStateMachine::new`].
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkConfig {
    /// Minimum peer count before the node considers itself `Connected` rather than `Disconnected`.
    pub network_quorum: u32,
    /// `Tracking -> Full` threshold (and its reverse). `Connected -> Tracking` has no threshold of
    /// its own: it fires as soon as the local ledger aligns with consensus.
    pub ledger_full_threshold: ValidationThreshold,
    /// Timer delay while `Connected`, `Tracking`, or `Full` and no switch is in progress.
    pub timer_connected_secs: u64,
    /// Timer delay immediately after forcing `Disconnected`.
    pub timer_disconnected_secs: u64,
    /// Timer delay while an acquisition is in progress but incomplete.
    pub timer_acquiring_secs: u64,
    /// Timer delay after an acquisition fails and is dropped.
    pub timer_acquire_failed_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network_quorum: 1,
            ledger_full_threshold: ValidationThreshold::new(1),
            timer_connected_secs: 10,
            timer_disconnected_secs: 5,
            timer_acquiring_secs: 5,
            timer_acquire_failed_secs: 10,
        }
    }
}
