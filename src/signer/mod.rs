//! Transaction signer abstraction for the GreenCoin SDK
//!
//! This module provides a trait-based abstraction over signing and sending
//! transactions, so the session layer works identically against a local
//! private key, a prompting wallet, or the mock ledger used in tests.

mod local;

pub use local::LocalSigner;

use crate::error::Result;
use alloy::primitives::{Address, Bytes, TxHash, U256};

/// Transaction request parameters
#[derive(Debug, Clone)]
pub struct TxRequest {
    /// Target contract address
    pub to: Address,
    /// Transaction value in wei
    pub value: U256,
    /// Encoded calldata
    pub data: Bytes,
    /// Optional gas limit override
    pub gas_limit: Option<u64>,
}

impl TxRequest {
    /// Create a new transaction request
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            value: U256::ZERO,
            data: data.into(),
            gas_limit: None,
        }
    }

    /// Set transaction value
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set gas limit
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// Summary of an inclusion receipt.
///
/// A reduced view of the node's receipt carrying only what the transaction
/// lifecycle needs: inclusion position and whether execution succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    /// Hash of the included transaction
    pub tx_hash: TxHash,
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// False when the contract reverted the call
    pub success: bool,
}

/// Trait for signing and sending EVM transactions
///
/// Implementations:
/// - [`LocalSigner`]: signs locally with a raw private key
/// - test doubles that apply calls to an in-memory ledger
pub trait TransactionSigner: Send + Sync {
    /// Returns the signer's EVM address
    fn address(&self) -> Address;

    /// Signs and sends a transaction, returning the hash assigned at
    /// submission. Fails with `RejectedBySigner` if the signer declines
    /// before the call reaches the network, or `SubmissionFailed` on a
    /// provider/network error.
    fn sign_and_send(
        &self,
        tx: TxRequest,
    ) -> impl std::future::Future<Output = Result<TxHash>> + Send;

    /// Looks up the inclusion receipt for a submitted transaction.
    /// `None` while the transaction is still in the pending pool.
    fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> impl std::future::Future<Output = Result<Option<TxReceipt>>> + Send;

    /// Executes a read-only contract call as the signer's account
    /// (`eth_call` with `from` set, so caller-scoped views resolve
    /// correctly).
    fn call(
        &self,
        tx: TxRequest,
    ) -> impl std::future::Future<Output = Result<Bytes>> + Send;
}
