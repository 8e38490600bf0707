//! Error types for the NFT Bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not the validator")]
    NotValidator,

    #[error("Unauthorized: caller is not token owner of {token_id}")]
    NotTokenOwner { token_id: u64 },

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    // ========================================================================
    // Admin Errors
    // ========================================================================

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Chain Registry Errors
    // ========================================================================

    #[error("Given chain is not supported: {chain_id}")]
    ChainNotSupported { chain_id: u64 },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("Token already exists: {token_id}")]
    TokenAlreadyExists { token_id: u64 },

    #[error("Transfer not authorized for token {token_id}: {reason}")]
    TransferNotAuthorized { token_id: u64, reason: String },

    // ========================================================================
    // Redeem Errors
    // ========================================================================

    #[error("Invalid sign: {reason} (fingerprint {fingerprint})")]
    InvalidSignature { fingerprint: String, reason: String },

    #[error("You can not redeem token twice: fingerprint {fingerprint} already redeemed")]
    AlreadyRedeemed { fingerprint: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },
}
