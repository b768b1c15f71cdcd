//! Session configuration for the GreenCoin SDK

use alloy::primitives::Address;

/// Configuration for one session: RPC endpoint, deployed contract address,
/// and the proof-of-action verification backend.
///
/// Passed into [`SessionController`](crate::SessionController) at construction
/// time so that independent sessions (e.g. test vs. production) can coexist.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Chain ID (11155111 for Sepolia, where the reference deployment lives)
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Deployed GreenCoin contract address
    pub contract: Address,
    /// Base URL of the proof-of-action verification backend
    pub verifier_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    /// Reference deployment configuration (Sepolia testnet)
    pub fn new() -> Self {
        Self {
            chain_id: 11155111,
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            contract: "0xAb8483F64d9C6d1EcF9b849Ae677dD3315835cb2"
                .parse()
                .unwrap(),
            verifier_url: "https://greencoin-backend-p2xm.onrender.com".to_string(),
        }
    }

    /// Create a fully custom configuration
    pub fn custom(
        chain_id: u64,
        rpc_url: impl Into<String>,
        contract: Address,
        verifier_url: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            rpc_url: rpc_url.into(),
            contract,
            verifier_url: verifier_url.into(),
        }
    }

    /// Override the RPC endpoint
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Override the contract address
    pub fn with_contract(mut self, contract: Address) -> Self {
        self.contract = contract;
        self
    }

    /// Override the verification backend URL
    pub fn with_verifier_url(mut self, verifier_url: impl Into<String>) -> Self {
        self.verifier_url = verifier_url.into();
        self
    }
}
