//! Wallet provider abstraction
//!
//! A [`SignerProvider`] supplies the authenticated signing identity for a
//! session: `connect` requests account access, `current_signer` returns the
//! signer for the wallet's *currently active* account (never a value cached
//! from a previous connection, so an account switch in the wallet is visible
//! to the session on the next call).

use crate::error::Result;
use crate::signer::{LocalSigner, TransactionSigner};
use alloy::primitives::Address;

/// Source of signing identities for a session
pub trait SignerProvider: Send + Sync {
    /// Signer type supplied by this provider
    type Signer: TransactionSigner;

    /// Request account access from the wallet and return the primary
    /// account. Fails with `ProviderUnavailable` if no wallet/node is
    /// reachable, or `UserRejected` if the access prompt is declined.
    fn connect(&self) -> impl std::future::Future<Output = Result<Address>> + Send;

    /// Signer bound to the presently active account
    fn current_signer(&self) -> impl std::future::Future<Output = Result<Self::Signer>> + Send;
}

/// Wallet over a single local private key.
///
/// The active account never changes for this provider; `connect` probes the
/// RPC endpoint so an unreachable node surfaces as `ProviderUnavailable`
/// before any contract call is attempted.
pub struct KeyWallet {
    signer: LocalSigner,
}

impl KeyWallet {
    /// Create a wallet from a hex private key and RPC endpoint
    pub fn new(private_key: impl AsRef<str>, rpc_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            signer: LocalSigner::from_private_key(private_key, rpc_url)?,
        })
    }

    /// Address of the wallet's single account
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

impl SignerProvider for KeyWallet {
    type Signer = LocalSigner;

    async fn connect(&self) -> Result<Address> {
        self.signer.probe().await?;
        Ok(self.signer.address())
    }

    async fn current_signer(&self) -> Result<LocalSigner> {
        Ok(self.signer.clone())
    }
}
