//! Message types for the NFT Bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address, manages the chain registry
    pub admin: String,
    /// Validator account. Must be a 20-byte account; its bytes are the
    /// address redeem signatures are checked against.
    pub validator: String,
    /// Token contract the bridge takes custody from and mints through
    pub nft_contract: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Chain Registry (admin only)
    // ========================================================================
    /// Register a counterparty chain. No-op if already registered.
    AddChain { chain_id: u64 },

    /// Deregister a counterparty chain. No-op if not registered.
    RemoveChain { chain_id: u64 },

    // ========================================================================
    // Swap
    // ========================================================================
    /// Lock a token into bridge custody for transfer to `destination_chain_id`
    ///
    /// The caller must own the token and have approved the bridge for it
    /// (per-token approval or operator approval).
    Swap {
        token_id: u64,
        destination_chain_id: u64,
        nonce: u64,
    },

    // ========================================================================
    // Redeem (validator only)
    // ========================================================================
    /// Settle a swap made on `source_chain_id`
    ///
    /// `signature` is the validator's 65-byte `r ‖ s ‖ v` signature over the
    /// EIP-191 digest of the redeem fingerprint.
    Redeem {
        token_id: u64,
        recipient: String,
        source_chain_id: u64,
        nonce: u64,
        token_uri: String,
        signature: Binary,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Propose a new admin (starts 7-day timelock)
    ProposeAdmin { new_admin: String },

    /// Accept pending admin role (after timelock)
    AcceptAdmin {},

    /// Cancel pending admin proposal
    CancelAdminProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns bridge configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns whether a chain is registered
    #[returns(IsChainSupportedResponse)]
    IsChainSupported { chain_id: u64 },

    /// Returns registered chains in ascending order
    #[returns(SupportedChainsResponse)]
    SupportedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Returns whether a fingerprint has been redeemed
    #[returns(IsRedeemedResponse)]
    IsRedeemed { fingerprint: Binary },

    /// Computes the redeem fingerprint the validator must sign
    #[returns(FingerprintResponse)]
    ComputeFingerprint {
        token_id: u64,
        recipient: String,
        source_chain_id: u64,
        nonce: u64,
    },

    /// Returns bridge statistics
    #[returns(StatsResponse)]
    Stats {},

    /// Returns pending admin change (if any)
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub validator: Addr,
    pub nft_contract: Addr,
}

#[cw_serde]
pub struct IsChainSupportedResponse {
    pub chain_id: u64,
    pub supported: bool,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chains: Vec<u64>,
}

#[cw_serde]
pub struct IsRedeemedResponse {
    pub redeemed: bool,
}

#[cw_serde]
pub struct FingerprintResponse {
    pub fingerprint: Binary,
    /// Digest the validator signs (EIP-191 over the fingerprint)
    pub signing_digest: Binary,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_swaps: u64,
    pub total_redeems: u64,
    pub total_minted: u64,
    pub total_released: u64,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}
