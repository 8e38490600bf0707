//! Typed bridge events
//!
//! Every state transition appends its events to the `Response` in order.
//! Relayers and indexers consume them from the transaction result; the
//! engines never read them back.

use cosmwasm_std::{Addr, Event};

use crate::hash::bytes32_to_hex;

/// How a redeem settled on this chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// First arrival of the token id: minted fresh
    Mint,
    /// Token was in bridge custody: released to the recipient
    Release,
}

impl Settlement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Settlement::Mint => "mint",
            Settlement::Release => "release",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    ChainAdded {
        chain_id: u64,
        changed: bool,
    },
    ChainRemoved {
        chain_id: u64,
        changed: bool,
    },
    SwapInitialized {
        token_id: u64,
        owner: Addr,
        destination_chain_id: u64,
        nonce: u64,
        token_uri: String,
    },
    SwapRedeemed {
        token_id: u64,
        recipient: Addr,
        source_chain_id: u64,
        fingerprint: [u8; 32],
        settlement: Settlement,
    },
}

impl BridgeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::ChainAdded { .. } => "chain_added",
            BridgeEvent::ChainRemoved { .. } => "chain_removed",
            BridgeEvent::SwapInitialized { .. } => "swap_initialized",
            BridgeEvent::SwapRedeemed { .. } => "swap_redeemed",
        }
    }
}

impl From<BridgeEvent> for Event {
    fn from(event: BridgeEvent) -> Self {
        let base = Event::new(event.name());
        match event {
            BridgeEvent::ChainAdded { chain_id, changed }
            | BridgeEvent::ChainRemoved { chain_id, changed } => base
                .add_attribute("chain_id", chain_id.to_string())
                .add_attribute("changed", changed.to_string()),
            BridgeEvent::SwapInitialized {
                token_id,
                owner,
                destination_chain_id,
                nonce,
                token_uri,
            } => base
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("owner", owner)
                .add_attribute("destination_chain_id", destination_chain_id.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("token_uri", token_uri),
            BridgeEvent::SwapRedeemed {
                token_id,
                recipient,
                source_chain_id,
                fingerprint,
                settlement,
            } => base
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("recipient", recipient)
                .add_attribute("source_chain_id", source_chain_id.to_string())
                .add_attribute("fingerprint", bytes32_to_hex(&fingerprint))
                .add_attribute("settlement", settlement.as_str()),
        }
    }
}
