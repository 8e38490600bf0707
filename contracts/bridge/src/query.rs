//! Query handlers for the NFT Bridge contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult};

use crate::address_codec::canonical_account;
use crate::hash::{compute_fingerprint, eth_signed_message_hash, parse_fingerprint};
use crate::msg::{
    ConfigResponse, FingerprintResponse, IsChainSupportedResponse, IsRedeemedResponse,
    PendingAdminResponse, StatsResponse, SupportedChainsResponse,
};
use crate::state::{CHAIN_REGISTRY, CONFIG, PENDING_ADMIN, REDEEM_LEDGER, STATS};

// ============================================================================
// Core Queries
// ============================================================================

/// Query bridge configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        validator: config.validator,
        nft_contract: config.nft_contract,
    })
}

/// Query bridge statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_swaps: stats.total_swaps,
        total_redeems: stats.total_redeems,
        total_minted: stats.total_minted,
        total_released: stats.total_released,
    })
}

pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}

// ============================================================================
// Chain Queries
// ============================================================================

pub fn query_is_chain_supported(deps: Deps, chain_id: u64) -> StdResult<IsChainSupportedResponse> {
    Ok(IsChainSupportedResponse {
        chain_id,
        supported: CHAIN_REGISTRY.is_supported(deps.storage, chain_id),
    })
}

/// Query registered chains with pagination.
pub fn query_supported_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SupportedChainsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let chains = CHAIN_REGISTRY.list(deps.storage, start_after, limit)?;
    Ok(SupportedChainsResponse { chains })
}

// ============================================================================
// Redeem Queries
// ============================================================================

pub fn query_is_redeemed(deps: Deps, fingerprint: Binary) -> StdResult<IsRedeemedResponse> {
    let fingerprint =
        parse_fingerprint(&fingerprint).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(IsRedeemedResponse {
        redeemed: REDEEM_LEDGER.is_redeemed(deps.storage, &fingerprint)?,
    })
}

/// Compute the fingerprint of a redeem and the digest the validator signs.
pub fn query_compute_fingerprint(
    deps: Deps,
    token_id: u64,
    recipient: String,
    source_chain_id: u64,
    nonce: u64,
) -> StdResult<FingerprintResponse> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let recipient =
        canonical_account(&recipient).map_err(|e| StdError::generic_err(e.to_string()))?;

    let fingerprint = compute_fingerprint(token_id, &recipient, source_chain_id, nonce);
    Ok(FingerprintResponse {
        fingerprint: Binary::from(fingerprint.to_vec()),
        signing_digest: Binary::from(eth_signed_message_hash(&fingerprint).to_vec()),
    })
}
