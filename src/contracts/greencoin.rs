//! GreenCoin contract bindings
//!
//! The three-argument `grantPoints(to, amount, actionType)` form is the
//! authoritative interface; an earlier two-argument revision of the contract
//! is superseded and not supported.

use alloy::sol;

sol! {
    /// GreenCoin rewards contract interface
    #[sol(rpc)]
    interface IGreenCoin {
        /// Authorize an account to grant points.
        /// Restricted by the contract itself; the client submits the call
        /// and surfaces the contract's rejection if any.
        function addVerifier(address verifier) external;

        /// Award points to an account for a recorded action.
        /// `actionType` is a free-text label persisted on-chain; the empty
        /// string is permitted.
        function grantPoints(
            address to,
            uint256 amount,
            string calldata actionType
        ) external;

        /// Point balance of the calling account
        function getMyPoints() external view returns (uint256);

        event VerifierAdded(address indexed verifier);

        event PointsGranted(
            address indexed to,
            uint256 amount,
            string actionType
        );
    }
}
