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

/// The node's classification of its own situation relative to the network, as maintained by the
/// operating mode state machine.
///
/// Transitions are documented on `ledgercore::fsm::NetworkStateMachine::check_state`; this type
/// only enumerates the four reachable states, ordered here from least to most synchronized so
/// that `mode as u8` gives a coarse "how caught up are we" ranking.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum OperatingMode {
    /// Fewer than the configured quorum of peers are reachable.
    #[default]
    Disconnected,
    /// Quorum is satisfied but the local ledger has not yet been reconciled against consensus.
    Connected,
    /// The local ledger matches consensus but validation evidence does not yet justify full trust.
    Tracking,
    /// Validation evidence crosses the full-trust threshold.
    Full,
}

impl core::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OperatingMode::Disconnected => "disconnected",
            OperatingMode::Connected => "connected",
            OperatingMode::Tracking => "tracking",
            OperatingMode::Full => "full",
        };
        f.write_str(s)
    }
}
