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

use ledger_types::{NodeId, RelayFrame, ResultCode, TransactionStatus};

use crate::collab::{ConnectionPool, MasterLedger, MasterTransaction, Transaction};

/// Fault propagated out of [`process_transaction`] when the master ledger itself fails, as
/// opposed to the transaction merely being rejected.
///
/// Transparent over the collaborator's own I/O error type where one is available (a hard `Err`
/// from [`MasterLedger::do_transaction`]); `ResultCodeFailed` covers the case where the
/// collaborator classifies the outcome as [`ResultCode::Failed`] without surfacing a concrete
/// error value.
#[derive(Debug, Display, Error, From)]
pub enum LedgerIoFault<E: Error> {
    #[from]
    #[display(inner)]
    Collaborator(E),

    #[display("master ledger reported a failure applying the transaction")]
    ResultCodeFailed,
}

/// Wall-clock seconds, supplied by the caller since this crate has no notion of a system clock.
pub type Timestamp = u64;

/// Routes a submitted transaction through dedup, signature verification, and ledger application,
/// returning its terminal status.
///
/// `source` identifies the peer the transaction arrived from, if any, so it is excluded from relay
/// on acceptance. Only a [`MasterLedger`] fault is returned as `Err`; every other outcome —
/// duplicate, held, obsolete, invalid, or included — is encoded in the returned
/// [`TransactionStatus`].
#[tracing::instrument(level = "debug", skip_all, fields(tx = %tx.id()))]
pub fn process_transaction<L, T>(
    ledger: &mut L,
    store: &mut T,
    pool: &mut impl ConnectionPool,
    mut tx: L::Tx,
    source: Option<NodeId>,
    now: Timestamp,
) -> Result<TransactionStatus, LedgerIoFault<L::IoFault>>
where
    L: MasterLedger,
    T: MasterTransaction<L::Tx>,
{
    if let Some(existing) = store.fetch(tx.id(), false) {
        let status = existing.status();
        tracing::debug!(?status, "duplicate transaction, returning stored status unchanged");
        return Ok(status);
    }

    if !tx.verify_signature() {
        tracing::warn!("transaction failed signature verification");
        return Ok(TransactionStatus::Invalid);
    }

    let result = ledger.do_transaction(&tx).map_err(LedgerIoFault::Collaborator)?;

    let status = match result {
        ResultCode::Failed => {
            tracing::error!("master ledger reported a failure applying transaction");
            return Err(LedgerIoFault::ResultCodeFailed);
        }
        ResultCode::PreSeq => {
            tracing::info!("transaction sequence ahead of account, holding");
            tx.set_status(TransactionStatus::Held);
            store.canonicalize(&tx, true);
            ledger.add_held_transaction(tx);
            TransactionStatus::Held
        }
        ResultCode::PastSeq | ResultCode::PastLedger => {
            tracing::debug!("transaction applies to a superseded sequence or ledger");
            TransactionStatus::Obsolete
        }
        ResultCode::Success => {
            tracing::info!("transaction included");
            tx.set_status(TransactionStatus::Included);
            store.canonicalize(&tx, true);
            let frame = RelayFrame::new(tx.raw(), now, ledger.current_ledger_index());
            pool.relay_message(source, frame);
            TransactionStatus::Included
        }
        ResultCode::Other(code) => {
            tracing::warn!(code, "master ledger returned an unrecognized result code");
            TransactionStatus::Invalid
        }
    };

    Ok(status)
}
