//! Local private key signer implementation

use super::{TransactionSigner, TxReceipt, TxRequest};
use crate::error::{Result, SessionError};
use alloy::network::{Ethereum, EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use std::sync::Arc;

/// Signer backed by a raw private key held in memory.
///
/// Signing never prompts, so this implementation cannot produce
/// `RejectedBySigner`; that kind is reserved for interactive signers.
#[derive(Clone)]
pub struct LocalSigner {
    /// Provider with wallet filler - handles nonce, gas, chain_id, and signing
    provider: Arc<dyn Provider<Ethereum>>,
    address: Address,
}

impl LocalSigner {
    /// Create a new LocalSigner from a private key hex string
    ///
    /// # Arguments
    ///
    /// * `private_key` - Hex-encoded private key (with or without 0x prefix)
    /// * `rpc_url` - RPC endpoint URL
    pub fn from_private_key(
        private_key: impl AsRef<str>,
        rpc_url: impl AsRef<str>,
    ) -> Result<Self> {
        let key = private_key.as_ref();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: alloy::signers::local::PrivateKeySigner = key
            .parse()
            .map_err(|e| SessionError::InvalidInput(format!("invalid private key: {e}")))?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url: Url = rpc_url
            .as_ref()
            .parse()
            .map_err(|e| SessionError::InvalidInput(format!("invalid RPC URL: {e}")))?;

        // Provider with wallet filler - fills nonce, gas, chain_id and signs
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

        Ok(Self {
            provider: Arc::new(provider),
            address,
        })
    }

    /// Probe the RPC endpoint. Used by the wallet layer to distinguish a
    /// reachable provider from an unavailable one at connect time.
    pub async fn probe(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| SessionError::ProviderUnavailable(e.to_string()))
    }

    /// Get the native token balance of the signing account
    pub async fn get_balance(&self) -> Result<U256> {
        self.provider
            .get_balance(self.address)
            .await
            .map_err(|e| SessionError::QueryFailed(e.to_string()))
    }
}

impl TransactionSigner for LocalSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_and_send(&self, tx: TxRequest) -> Result<TxHash> {
        let mut tx_request = alloy::rpc::types::TransactionRequest::default()
            .with_to(tx.to)
            .with_value(tx.value)
            .with_input(tx.data);

        if let Some(gas_limit) = tx.gas_limit {
            tx_request = tx_request.with_gas_limit(gas_limit);
        }

        // Send transaction - provider will fill nonce, gas, chain_id and sign
        let pending_tx = self
            .provider
            .send_transaction(tx_request)
            .await
            .map_err(|e| SessionError::SubmissionFailed(e.to_string()))?;

        Ok(*pending_tx.tx_hash())
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<Option<TxReceipt>> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| SessionError::QueryFailed(e.to_string()))?;

        Ok(receipt.map(|r| TxReceipt {
            tx_hash,
            block_number: r.block_number,
            success: r.status(),
        }))
    }

    async fn call(&self, tx: TxRequest) -> Result<Bytes> {
        // from is the signing account so that caller-scoped views
        // (getMyPoints) resolve against the right identity
        let request = alloy::rpc::types::TransactionRequest::default()
            .with_from(self.address)
            .with_to(tx.to)
            .with_input(tx.data);

        self.provider
            .call(request)
            .await
            .map_err(|e| SessionError::QueryFailed(e.to_string()))
    }
}
