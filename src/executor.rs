//! Transaction lifecycle: submit, then await inclusion
//!
//! Submission and confirmation are two phases because inclusion is
//! asynchronous: `submit` returns as soon as the network accepts the call
//! into its pending pool, and `await_confirmation` polls for the receipt.
//! Exactly one terminal outcome is produced per submitted call - Confirmed,
//! or one specific failure kind; there is no partial state.

use crate::contract::{CallKind, ContractCall};
use crate::error::{Result, SessionError};
use crate::signer::TransactionSigner;
use alloy::primitives::TxHash;
use std::time::Duration;

/// Lifecycle status of one in-flight mutating call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// Accepted into the pending pool, not yet included
    Submitted,
    /// Included on-chain and executed successfully
    Confirmed,
    /// Terminal failure (reverted on-chain)
    Failed,
}

/// One in-flight mutating contract call.
///
/// Created at submission time, mutated only by the executor as inclusion
/// results arrive, and discarded by callers once terminal.
#[derive(Debug, Clone)]
pub struct PendingTransaction {
    /// Which contract operation was submitted
    pub kind: CallKind,
    /// Display form of the submitted parameters
    pub summary: String,
    /// Transaction identifier assigned at submission
    pub tx_hash: TxHash,
    /// Current lifecycle status
    pub status: TxStatus,
}

/// Outcome of one confirmation wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Included and executed successfully
    Confirmed,
    /// Not yet included after the poll budget; the transaction is still
    /// running to its terminal outcome on-chain and may be awaited again
    StillPending,
}

/// Executes mutating contract calls through their lifecycle.
///
/// Does not queue concurrent calls on the caller's behalf; each call site is
/// responsible for not double-submitting while one is pending.
pub struct TransactionExecutor {
    poll_interval: Duration,
    max_polls: u32,
}

impl Default for TransactionExecutor {
    fn default() -> Self {
        // 60 polls * 2s = report "still pending" after two minutes
        Self {
            poll_interval: Duration::from_secs(2),
            max_polls: 60,
        }
    }
}

impl TransactionExecutor {
    /// Create an executor with a custom receipt-poll schedule
    pub fn new(poll_interval: Duration, max_polls: u32) -> Self {
        Self {
            poll_interval,
            max_polls,
        }
    }

    /// Submit a prepared call. On success the returned transaction carries
    /// the hash assigned by the network and status [`TxStatus::Submitted`].
    ///
    /// If the signer rejects (`RejectedBySigner`) or the provider fails
    /// (`SubmissionFailed`) no PendingTransaction is created.
    pub async fn submit<S: TransactionSigner>(
        &self,
        signer: &S,
        call: ContractCall,
    ) -> Result<PendingTransaction> {
        let tx_hash = signer.sign_and_send(call.tx).await?;

        tracing::debug!(%tx_hash, kind = ?call.kind, "transaction submitted");

        Ok(PendingTransaction {
            kind: call.kind,
            summary: call.summary,
            tx_hash,
            status: TxStatus::Submitted,
        })
    }

    /// Await inclusion of a submitted transaction.
    ///
    /// Polls for the receipt up to the configured budget. Returns
    /// [`Confirmation::StillPending`] when the budget is exhausted without a
    /// receipt (status stays `Submitted`); callers surface that state and may
    /// await again. An included-but-reverted receipt is
    /// [`SessionError::ExecutionReverted`]: terminal, non-retryable, and
    /// distinct from any network failure.
    pub async fn await_confirmation<S: TransactionSigner>(
        &self,
        signer: &S,
        pending: &mut PendingTransaction,
    ) -> Result<Confirmation> {
        for attempt in 0..self.max_polls {
            if let Some(receipt) = signer.transaction_receipt(pending.tx_hash).await? {
                if receipt.success {
                    pending.status = TxStatus::Confirmed;
                    tracing::info!(
                        tx_hash = %pending.tx_hash,
                        block = ?receipt.block_number,
                        kind = ?pending.kind,
                        "transaction confirmed"
                    );
                    return Ok(Confirmation::Confirmed);
                }

                pending.status = TxStatus::Failed;
                tracing::warn!(tx_hash = %pending.tx_hash, "transaction reverted");
                return Err(SessionError::ExecutionReverted {
                    tx_hash: pending.tx_hash,
                });
            }

            if attempt + 1 < self.max_polls {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        tracing::debug!(tx_hash = %pending.tx_hash, "no receipt within poll budget");
        Ok(Confirmation::StillPending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::{TxReceipt, TxRequest};
    use alloy::primitives::{Address, Bytes, B256};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Signer that follows a script: an optional submission failure, then a
    /// sequence of receipt lookups.
    struct ScriptedSigner {
        account: Address,
        reject_signing: bool,
        fail_submission: bool,
        receipts: Mutex<VecDeque<Option<TxReceipt>>>,
    }

    impl ScriptedSigner {
        fn confirming_after(polls: usize, success: bool) -> Self {
            let tx_hash = B256::with_last_byte(1);
            let mut receipts: VecDeque<Option<TxReceipt>> =
                std::iter::repeat(None).take(polls).collect();
            receipts.push_back(Some(TxReceipt {
                tx_hash,
                block_number: Some(7),
                success,
            }));
            Self {
                account: Address::with_last_byte(0xEE),
                reject_signing: false,
                fail_submission: false,
                receipts: Mutex::new(receipts),
            }
        }

        fn never_confirming() -> Self {
            Self {
                account: Address::with_last_byte(0xEE),
                reject_signing: false,
                fail_submission: false,
                receipts: Mutex::new(VecDeque::new()),
            }
        }
    }

    impl TransactionSigner for ScriptedSigner {
        fn address(&self) -> Address {
            self.account
        }

        async fn sign_and_send(&self, _tx: TxRequest) -> crate::Result<B256> {
            if self.reject_signing {
                return Err(SessionError::RejectedBySigner("declined prompt".into()));
            }
            if self.fail_submission {
                return Err(SessionError::SubmissionFailed("connection reset".into()));
            }
            Ok(B256::with_last_byte(1))
        }

        async fn transaction_receipt(&self, _tx_hash: B256) -> crate::Result<Option<TxReceipt>> {
            Ok(self.receipts.lock().unwrap().pop_front().unwrap_or(None))
        }

        async fn call(&self, _tx: TxRequest) -> crate::Result<Bytes> {
            Ok(Bytes::new())
        }
    }

    fn fast_executor() -> TransactionExecutor {
        TransactionExecutor::new(Duration::ZERO, 5)
    }

    fn sample_call() -> ContractCall {
        ContractCall {
            kind: CallKind::AddVerifier,
            tx: TxRequest::new(Address::with_last_byte(0xC0), Bytes::new()),
            summary: format!("addVerifier({})", Address::with_last_byte(0xAA)),
        }
    }

    #[tokio::test]
    async fn submit_then_confirm() {
        let signer = ScriptedSigner::confirming_after(2, true);
        let executor = fast_executor();

        let call = sample_call();
        let mut pending = executor.submit(&signer, call).await.unwrap();
        assert_eq!(pending.status, TxStatus::Submitted);
        assert_eq!(pending.kind, CallKind::AddVerifier);

        let outcome = executor
            .await_confirmation(&signer, &mut pending)
            .await
            .unwrap();
        assert_eq!(outcome, Confirmation::Confirmed);
        assert_eq!(pending.status, TxStatus::Confirmed);
    }

    #[tokio::test]
    async fn signer_rejection_creates_no_pending_transaction() {
        let mut signer = ScriptedSigner::never_confirming();
        signer.reject_signing = true;
        let executor = fast_executor();

        let call = sample_call();
        let err = executor.submit(&signer, call).await.unwrap_err();
        assert!(matches!(err, SessionError::RejectedBySigner(_)));
    }

    #[tokio::test]
    async fn submission_failure_surfaces_directly() {
        let mut signer = ScriptedSigner::never_confirming();
        signer.fail_submission = true;
        let executor = fast_executor();

        let call = sample_call();
        let err = executor.submit(&signer, call).await.unwrap_err();
        assert!(matches!(err, SessionError::SubmissionFailed(_)));
    }

    #[tokio::test]
    async fn reverted_receipt_is_terminal_failure() {
        let signer = ScriptedSigner::confirming_after(0, false);
        let executor = fast_executor();

        let call = sample_call();
        let mut pending = executor.submit(&signer, call).await.unwrap();

        let err = executor
            .await_confirmation(&signer, &mut pending)
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::ExecutionReverted { .. }));
        assert_eq!(pending.status, TxStatus::Failed);
    }

    #[tokio::test]
    async fn exhausted_poll_budget_reports_still_pending() {
        let signer = ScriptedSigner::never_confirming();
        let executor = fast_executor();

        let call = sample_call();
        let mut pending = executor.submit(&signer, call).await.unwrap();

        let outcome = executor
            .await_confirmation(&signer, &mut pending)
            .await
            .unwrap();
        assert_eq!(outcome, Confirmation::StillPending);
        // not terminal: the transaction may still confirm later
        assert_eq!(pending.status, TxStatus::Submitted);
    }
}
