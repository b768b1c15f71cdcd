//! Contract handle: a deployed address, its ABI, and a bound signer
//!
//! Binding is pure construction - no network call happens until a prepared
//! call is submitted or a read is executed. A handle is valid only as long
//! as the account it was bound for is still the wallet's active account;
//! [`ContractHandle::ensure_bound_to`] enforces that a stale handle is never
//! reused after an account switch.

use crate::contracts::IGreenCoin;
use crate::error::{Result, SessionError};
use crate::signer::{TransactionSigner, TxRequest};
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;

/// Kind of mutating contract call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `addVerifier(address)`
    AddVerifier,
    /// `grantPoints(address,uint256,string)`
    GrantPoints,
}

/// A prepared, ABI-encoded contract call ready for submission
#[derive(Debug, Clone)]
pub struct ContractCall {
    /// Which contract operation this encodes
    pub kind: CallKind,
    /// Encoded transaction request
    pub tx: TxRequest,
    /// Display form of the submitted parameters
    pub summary: String,
}

/// Binding of {contract address, ABI, signer} for one session account
pub struct ContractHandle<S: TransactionSigner> {
    address: Address,
    account: Address,
    signer: S,
}

impl<S: TransactionSigner> ContractHandle<S> {
    /// Bind the deployed contract to a signer. Deterministic; the bound
    /// account is the signer's address at bind time.
    pub fn bind(address: Address, signer: S) -> Self {
        let account = signer.address();
        Self {
            address,
            account,
            signer,
        }
    }

    /// Deployed contract address
    pub fn contract_address(&self) -> Address {
        self.address
    }

    /// Account this handle was bound for
    pub fn account(&self) -> Address {
        self.account
    }

    /// Signer the handle was constructed with
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Fail with `StaleHandle` unless `active` is still the account this
    /// handle was bound for. Called before every operation so that a handle
    /// left over from a previous account never signs on its behalf.
    pub fn ensure_bound_to(&self, active: Address) -> Result<()> {
        if self.account == active {
            Ok(())
        } else {
            Err(SessionError::StaleHandle {
                bound: self.account,
                active,
            })
        }
    }

    /// Prepare an `addVerifier` call
    pub fn add_verifier(&self, verifier: Address) -> ContractCall {
        let call = IGreenCoin::addVerifierCall { verifier };
        ContractCall {
            kind: CallKind::AddVerifier,
            tx: TxRequest::new(self.address, Bytes::from(call.abi_encode())),
            summary: format!("addVerifier({verifier})"),
        }
    }

    /// Prepare a `grantPoints` call
    pub fn grant_points(&self, to: Address, amount: U256, action_type: &str) -> ContractCall {
        let call = IGreenCoin::grantPointsCall {
            to,
            amount,
            actionType: action_type.to_string(),
        };
        ContractCall {
            kind: CallKind::GrantPoints,
            tx: TxRequest::new(self.address, Bytes::from(call.abi_encode())),
            summary: format!("grantPoints({to}, {amount}, {action_type:?})"),
        }
    }

    /// Read the bound account's point balance via `eth_call`
    pub async fn get_my_points(&self) -> Result<U256> {
        let call = IGreenCoin::getMyPointsCall {};
        let data = Bytes::from(call.abi_encode());

        let result = self.signer.call(TxRequest::new(self.address, data)).await?;

        IGreenCoin::getMyPointsCall::abi_decode_returns(&result)
            .map_err(|e| SessionError::QueryFailed(format!("failed to decode points: {e}")))
    }
}
