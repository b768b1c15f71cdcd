//! Session controller: the single entry point for the presentation layer
//!
//! Owns the connected account, the current contract handle, and the cached
//! point balance / verification outcome. All contract operations re-read the
//! wallet's active account first; an account switch fails the in-flight
//! request with `StaleHandle` and rebinds the handle, so a call never runs
//! on behalf of an account that is no longer active.

use crate::config::SessionConfig;
use crate::contract::ContractHandle;
use crate::error::{Result, SessionError};
use crate::executor::{PendingTransaction, TransactionExecutor};
use crate::points::{self, PointsBalance};
use crate::signer::TransactionSigner;
use crate::verifier::{ImageArtifact, ProofVerificationClient, VerificationResult};
use crate::wallet::SignerProvider;
use alloy::primitives::{Address, U256};

/// Connection state of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No wallet connected
    Disconnected,
    /// Connect request in flight
    Connecting,
    /// Signer obtained and contract bound
    Connected,
}

/// Orchestrates wallet, contract, transactions, queries, and verification
/// for one session.
pub struct SessionController<P: SignerProvider> {
    provider: P,
    config: SessionConfig,
    executor: TransactionExecutor,
    verifier: ProofVerificationClient,
    state: SessionState,
    account: Option<Address>,
    handle: Option<ContractHandle<P::Signer>>,
    points: Option<PointsBalance>,
    last_verification: Option<VerificationResult>,
}

impl<P: SignerProvider> SessionController<P> {
    /// Create a disconnected session over the given wallet provider
    pub fn new(provider: P, config: SessionConfig) -> Self {
        let verifier = ProofVerificationClient::new(&config.verifier_url);
        Self {
            provider,
            config,
            executor: TransactionExecutor::default(),
            verifier,
            state: SessionState::Disconnected,
            account: None,
            handle: None,
            points: None,
            last_verification: None,
        }
    }

    /// Replace the transaction executor (custom receipt-poll schedule)
    pub fn with_executor(mut self, executor: TransactionExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Current connection state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Connected account, if any
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Last fetched point balance, if any
    pub fn points(&self) -> Option<&PointsBalance> {
        self.points.as_ref()
    }

    /// Outcome of the most recent successful verification request
    pub fn last_verification(&self) -> Option<&VerificationResult> {
        self.last_verification.as_ref()
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Connect the wallet and bind the contract.
    ///
    /// Disconnected -> Connecting -> Connected; any failure returns the
    /// session to Disconnected and is surfaced, not retried.
    pub async fn connect(&mut self) -> Result<Address> {
        self.state = SessionState::Connecting;

        match self.establish().await {
            Ok(account) => {
                self.state = SessionState::Connected;
                tracing::info!(%account, contract = %self.config.contract, "session connected");
                Ok(account)
            }
            Err(err) => {
                self.state = SessionState::Disconnected;
                self.account = None;
                self.handle = None;
                Err(err)
            }
        }
    }

    async fn establish(&mut self) -> Result<Address> {
        let account = self.provider.connect().await?;
        let signer = self.provider.current_signer().await?;
        self.handle = Some(ContractHandle::bind(self.config.contract, signer));
        self.account = Some(account);
        Ok(account)
    }

    /// Drop all session state and return to Disconnected
    pub fn disconnect(&mut self) {
        self.state = SessionState::Disconnected;
        self.account = None;
        self.handle = None;
        self.points = None;
        self.last_verification = None;
    }

    /// Submit `addVerifier` and await its outcome.
    ///
    /// Authorization is not pre-checked; an unauthorized caller surfaces as
    /// `ExecutionReverted` from the contract.
    pub async fn add_verifier(&mut self, verifier: &str) -> Result<PendingTransaction> {
        let verifier = parse_address(verifier, "verifier address")?;
        self.refresh_handle().await?;

        let handle = self.handle.as_ref().ok_or(SessionError::NotConnected)?;
        let call = handle.add_verifier(verifier);
        let mut pending = self.executor.submit(handle.signer(), call).await?;
        self.executor
            .await_confirmation(handle.signer(), &mut pending)
            .await?;
        Ok(pending)
    }

    /// Submit `grantPoints` and await its outcome.
    ///
    /// `amount` must parse as a non-negative integer; `action_type` is a
    /// free-text label and may be empty. A submitted grant marks the cached
    /// balance stale until the next fetch, whether or not inclusion has
    /// resolved yet.
    pub async fn grant_points(
        &mut self,
        to: &str,
        amount: &str,
        action_type: &str,
    ) -> Result<PendingTransaction> {
        let to = parse_address(to, "recipient address")?;
        let amount = parse_amount(amount)?;
        self.refresh_handle().await?;

        let handle = self.handle.as_ref().ok_or(SessionError::NotConnected)?;
        let call = handle.grant_points(to, amount, action_type);
        let signer = handle.signer();
        let mut pending = self.executor.submit(signer, call).await?;

        // the grant is live on the network from this point; the cached
        // balance can no longer be trusted even while inclusion is pending
        if let Some(points) = &mut self.points {
            points.mark_stale();
        }

        self.executor.await_confirmation(signer, &mut pending).await?;
        Ok(pending)
    }

    /// Fetch the session account's on-chain point balance and cache it
    pub async fn fetch_points(&mut self) -> Result<PointsBalance> {
        self.refresh_handle().await?;

        let handle = self.handle.as_ref().ok_or(SessionError::NotConnected)?;
        let balance = points::fetch(handle).await?;
        self.points = Some(balance);
        Ok(balance)
    }

    /// Submit an image to the proof-of-action verifier.
    ///
    /// Advisory only: the verdict has no effect on the contract and a grant
    /// is never gated on it by this layer. The result is cached only on
    /// success; a transport failure leaves the previous outcome untouched.
    pub async fn verify_proof(&mut self, artifact: ImageArtifact) -> Result<VerificationResult> {
        let result = self.verifier.verify(artifact).await?;
        self.last_verification = Some(result.clone());
        Ok(result)
    }

    /// Fail the current request and rebind if the wallet's active account
    /// has changed since the handle was bound.
    async fn refresh_handle(&mut self) -> Result<()> {
        if self.state != SessionState::Connected {
            return Err(SessionError::NotConnected);
        }

        let signer = self.provider.current_signer().await?;
        let active = signer.address();

        let handle = self.handle.as_ref().ok_or(SessionError::NotConnected)?;
        if let Err(stale) = handle.ensure_bound_to(active) {
            tracing::info!(%active, "active account changed; rebinding contract handle");
            self.handle = Some(ContractHandle::bind(self.config.contract, signer));
            self.account = Some(active);
            self.points = None;
            return Err(stale);
        }
        Ok(())
    }
}

fn parse_address(input: &str, what: &str) -> Result<Address> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidInput(format!("{what} must not be empty")));
    }
    trimmed
        .parse()
        .map_err(|_| SessionError::InvalidInput(format!("{what} is not a valid address: {trimmed}")))
}

fn parse_amount(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SessionError::InvalidInput("amount must not be empty".into()));
    }
    trimmed.parse::<U256>().map_err(|_| {
        SessionError::InvalidInput(format!("amount must be a non-negative integer: {trimmed}"))
    })
}
