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

use crate::NodeId;

/// Tally of evidence backing a candidate closed-ledger hash during one pass of the operating mode
/// state machine.
///
/// Ordering is a strict lexicographic comparison over `(trusted, untrusted, nodes_using,
/// high_node)` in that order; `high_node` is the byte-wise maximum node id observed supporting the
/// candidate and is the final, deterministic tie-breaker so that independent nodes converge on the
/// same selection from the same evidence (see the design notes on bit-exact tie-breaking).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationCount {
    pub trusted_validations: u32,
    pub untrusted_validations: u32,
    pub nodes_using: u32,
    pub high_node: NodeId,
}

impl ValidationCount {
    pub fn new() -> Self { Self::default() }

    /// Records one more peer supporting this candidate, updating the tie-breaker if `node` is the
    /// new byte-wise maximum seen so far.
    pub fn record_node(&mut self, node: NodeId) {
        if self.nodes_using == 0 || node > self.high_node {
            self.high_node = node;
        }
        self.nodes_using += 1;
    }
}

impl PartialOrd for ValidationCount {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> { Some(self.cmp(other)) }
}

impl Ord for ValidationCount {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.trusted_validations
            .cmp(&other.trusted_validations)
            .then_with(|| self.untrusted_validations.cmp(&other.untrusted_validations))
            .then_with(|| self.nodes_using.cmp(&other.nodes_using))
            .then_with(|| self.high_node.cmp(&other.high_node))
    }
}
