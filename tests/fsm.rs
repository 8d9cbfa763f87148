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

//! Drives the operating mode state machine across several ticks, covering the quorum-driven
//! demotion, the ledger-switch/acquisition handshake, and the resulting mode transitions together
//! rather than each in isolation.

use ledger_types::{EntryKey, NodeId, OperatingMode};
use ledgercore::testing::{FakeAcquire, FakeLedger, FakePeer, FakePool, FakeWallet};
use ledgercore::{NetworkConfig, NetworkStateMachine, ValidationThreshold};

fn node(byte: u8) -> NodeId {
    let mut bytes = [0u8; 33];
    bytes[0] = byte;
    NodeId::from_byte_array(bytes)
}

fn hash(byte: u8) -> EntryKey { EntryKey::from_byte_array([byte; 32]) }

#[test]
fn two_peers_switch_ledgers_and_acquisition_completion_demotes_from_full() {
    let config = NetworkConfig {
        network_quorum: 2,
        ledger_full_threshold: ValidationThreshold::new(2),
        ..Default::default()
    };
    let mut fsm = NetworkStateMachine::new(config);
    let wallet = FakeWallet::new(node(0xEE));

    let local = hash(1);
    let target = hash(2);
    let mut ledger = FakeLedger::new(1);
    ledger.closed_ledger_hash = Some(local);

    // Tick 1: only one peer, below quorum of 2 -> forced disconnected.
    let mut pool = FakePool::new(vec![FakePeer::new(node(1), Some(local))]);
    let mut acquire = FakeAcquire::default();
    fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(fsm.mode(), OperatingMode::Disconnected);

    // Tick 2: quorum restored, both peers agree with the local view -> connected, then promoted
    // straight to tracking in the same pass since the local ledger already aligns with consensus.
    let mut pool =
        FakePool::new(vec![FakePeer::new(node(1), Some(local)), FakePeer::new(node(2), Some(local))]);
    fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(fsm.mode(), OperatingMode::Tracking);

    // Promote the tally up to "full" by having both peers plus the local node agree - that's 3
    // trusted validations which crosses the full threshold of 2.
    fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(fsm.mode(), OperatingMode::Full);

    // Tick 3: both peers now report a divergent hash -> switch required, demote from Full to
    // Tracking, and attach both peers to the acquisition for the new target.
    let mut pool =
        FakePool::new(vec![FakePeer::new(node(1), Some(target)), FakePeer::new(node(2), Some(target))]);
    let delay = fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(fsm.mode(), OperatingMode::Tracking);
    assert_eq!(delay, fsm.config().timer_acquiring_secs);
    let attached = acquire.attached_peers(target);
    assert!(attached.contains(&node(1)));
    assert!(attached.contains(&node(2)));

    // Tick 4: mark the acquisition for `target` complete; the FSM observes it, installs it on the
    // master ledger, and the local view now matches consensus.
    acquire.set_outcome(target, false, true);
    let delay = fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(delay, fsm.config().timer_connected_secs);
    assert_eq!(ledger.closed_ledger_hash, Some(target));
}

#[test]
fn acquisition_failure_drops_and_backs_off() {
    let config = NetworkConfig { network_quorum: 1, ..Default::default() };
    let mut fsm = NetworkStateMachine::new(config);
    let wallet = FakeWallet::new(node(0xEE));

    let local = hash(1);
    let target = hash(2);
    let mut ledger = FakeLedger::new(1);
    ledger.closed_ledger_hash = Some(local);

    // Two peers back `target`, outweighing the local node's lone, trusted vote for `local`, so
    // consensus unambiguously selects `target` without falling through to the high-node tie-break.
    let mut pool =
        FakePool::new(vec![FakePeer::new(node(1), Some(target)), FakePeer::new(node(2), Some(target))]);
    let mut acquire = FakeAcquire::default();
    acquire.set_outcome(target, true, false);

    let delay = fsm.check_state(&mut ledger, &mut pool, &mut acquire, &wallet);
    assert_eq!(delay, fsm.config().timer_acquire_failed_secs);
    assert!(acquire.attached_peers(target).is_empty());
}
