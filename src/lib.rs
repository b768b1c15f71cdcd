//! GreenCoin SDK for Rust
//!
//! A client SDK for the GreenCoin environmental rewards contract: connect a
//! signing wallet, submit `addVerifier` and `grantPoints` transactions,
//! query the caller's on-chain point balance, and submit proof-of-action
//! images to the remote verification backend.
//!
//! The [`SessionController`] is the single entry point: it owns the connected
//! account, the bound contract handle, and the cached balance/verification
//! outcome, and tracks every mutating call through its
//! submitted/confirmed/failed lifecycle.
//!
//! # Example
//!
//! ```rust,ignore
//! use greencoin_sdk::{KeyWallet, SessionConfig, SessionController};
//!
//! #[tokio::main]
//! async fn main() -> greencoin_sdk::Result<()> {
//!     let config = SessionConfig::default();
//!     let wallet = KeyWallet::new("0x...", &config.rpc_url)?;
//!     let mut session = SessionController::new(wallet, config);
//!
//!     let account = session.connect().await?;
//!     println!("connected as {account}");
//!
//!     session.grant_points("0xBBB...", "50", "park cleanup").await?;
//!     let balance = session.fetch_points().await?;
//!     println!("points: {}", balance.value);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod contract;
pub mod contracts;
pub mod error;
pub mod executor;
pub mod points;
pub mod session;
pub mod signer;
pub mod verifier;
pub mod wallet;

// Re-export main types for convenience
pub use config::SessionConfig;
pub use contract::{CallKind, ContractCall, ContractHandle};
pub use error::{Result, SessionError};
pub use executor::{Confirmation, PendingTransaction, TransactionExecutor, TxStatus};
pub use points::PointsBalance;
pub use session::{SessionController, SessionState};
pub use signer::{LocalSigner, TransactionSigner, TxReceipt, TxRequest};
pub use verifier::{ImageArtifact, ProofVerificationClient, Verdict, VerificationResult};
pub use wallet::{KeyWallet, SignerProvider};
