//! Read-only point balance query
//!
//! A fetched balance is a cache of authoritative on-chain state; the session
//! marks it stale the moment a grant confirms, and it stays stale until
//! re-fetched.

use crate::contract::ContractHandle;
use crate::error::Result;
use crate::signer::TransactionSigner;
use alloy::primitives::U256;

/// Cached point balance for the session account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBalance {
    /// Balance as last read from the contract
    pub value: U256,
    /// True once a grant has confirmed since this value was fetched
    pub stale: bool,
}

impl PointsBalance {
    /// A freshly fetched balance
    pub fn fresh(value: U256) -> Self {
        Self {
            value,
            stale: false,
        }
    }

    /// Flag the cached value as out of date
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }
}

/// Fetch the bound account's current balance.
///
/// Returns an exact current value or fails with `QueryFailed`; never a
/// partial or estimated result.
pub async fn fetch<S: TransactionSigner>(handle: &ContractHandle<S>) -> Result<PointsBalance> {
    let value = handle.get_my_points().await?;
    Ok(PointsBalance::fresh(value))
}
