//! Failure taxonomy for the GreenCoin SDK
//!
//! Every operation surfaces exactly one of these kinds to the caller; the SDK
//! never retries internally and never masks a revert or network error as
//! success.

use alloy::primitives::{Address, TxHash};

/// Convenience alias used throughout the SDK
pub type Result<T, E = SessionError> = std::result::Result<T, E>;

/// Errors produced by session, transaction, query, and verification operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No wallet provider / RPC node is reachable
    #[error("wallet provider unreachable: {0}")]
    ProviderUnavailable(String),

    /// The user declined the wallet's account-access prompt
    #[error("wallet access request rejected by user")]
    UserRejected,

    /// The user declined to sign; the call never reached the network
    #[error("signing rejected before submission: {0}")]
    RejectedBySigner(String),

    /// Network/provider error before inclusion; not retried automatically
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(String),

    /// Included on-chain but reverted by the contract's own logic.
    /// Terminal and non-retryable.
    #[error("transaction {tx_hash} reverted on-chain")]
    ExecutionReverted { tx_hash: TxHash },

    /// Read-only query failed at the provider/network level
    #[error("points query failed: {0}")]
    QueryFailed(String),

    /// Verification endpoint unreachable or returned a malformed response
    #[error("verification request failed: {0}")]
    TransportFailed(String),

    /// An operation requiring an established session was called without one
    #[error("no active session; call connect first")]
    NotConnected,

    /// The contract handle was bound for an account that is no longer active
    #[error("contract handle bound to {bound}, active account is {active}; rebind required")]
    StaleHandle { bound: Address, active: Address },

    /// Caller-supplied input failed validation before any network activity
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
