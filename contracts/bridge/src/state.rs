//! State definitions for the NFT Bridge contract
//!
//! The chain registry and the redeem ledger are wrapped in small accessor
//! types so every read and write of them goes through one place.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::{Bound, Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address, sole mutator of the chain registry
    pub admin: Addr,
    /// Validator address, sole submitter and signer of redeems
    pub validator: Addr,
    /// NFT contract holding the bridged collection
    pub nft_contract: Addr,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Tokens locked into custody by swaps
    pub total_swaps: u64,
    /// Successful redeems (mints + releases)
    pub total_redeems: u64,
    /// Redeems settled by minting a new token
    pub total_minted: u64,
    /// Redeems settled by releasing a custodied token
    pub total_released: u64,
}

// ============================================================================
// Chain Registry
// ============================================================================

/// Set of counterparty chain ids this bridge instance accepts
pub struct ChainRegistry<'a> {
    chains: Map<'a, u64, bool>,
}

impl<'a> ChainRegistry<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            chains: Map::new(namespace),
        }
    }

    /// Insert a chain. Returns whether membership changed.
    pub fn add(&self, storage: &mut dyn Storage, chain_id: u64) -> StdResult<bool> {
        if self.chains.has(storage, chain_id) {
            return Ok(false);
        }
        self.chains.save(storage, chain_id, &true)?;
        Ok(true)
    }

    /// Remove a chain. Returns whether membership changed.
    pub fn remove(&self, storage: &mut dyn Storage, chain_id: u64) -> bool {
        if !self.chains.has(storage, chain_id) {
            return false;
        }
        self.chains.remove(storage, chain_id);
        true
    }

    pub fn is_supported(&self, storage: &dyn Storage, chain_id: u64) -> bool {
        self.chains.has(storage, chain_id)
    }

    /// Registered chain ids in ascending order
    pub fn list(
        &self,
        storage: &dyn Storage,
        start_after: Option<u64>,
        limit: usize,
    ) -> StdResult<Vec<u64>> {
        let start = start_after.map(Bound::exclusive);
        self.chains
            .keys(storage, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }
}

// ============================================================================
// Redeem Ledger
// ============================================================================

/// Fingerprints of settled redeems. Entries are only ever set, never cleared.
pub struct RedeemLedger<'a> {
    redeemed: Map<'a, &'a [u8], bool>,
}

impl<'a> RedeemLedger<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            redeemed: Map::new(namespace),
        }
    }

    pub fn is_redeemed(&self, storage: &dyn Storage, fingerprint: &[u8; 32]) -> StdResult<bool> {
        Ok(self
            .redeemed
            .may_load(storage, fingerprint.as_slice())?
            .unwrap_or(false))
    }

    pub fn mark_redeemed(&self, storage: &mut dyn Storage, fingerprint: &[u8; 32]) -> StdResult<()> {
        self.redeemed.save(storage, fingerprint.as_slice(), &true)
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:nft-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Supported counterparty chains
/// Key: chain_id, Value: always true
pub const CHAIN_REGISTRY: ChainRegistry = ChainRegistry::new("supported_chains");

/// Settled redeems
/// Key: 32-byte fingerprint as &[u8], Value: true once redeemed
pub const REDEEM_LEDGER: RedeemLedger = RedeemLedger::new("redeemed");
