//! Outgoing swap handler.
//!
//! A swap locks the caller's token into bridge custody and announces it with
//! a `swap_initialized` event. Relayers pick the event up and the validator
//! authorizes the matching redeem on the destination chain.

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response};

use crate::custody::TokenCustody;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::state::{CHAIN_REGISTRY, STATS};

/// Lock `token_id` into bridge custody for `destination_chain_id`.
///
/// Nonce and destination are recorded in the event only; uniqueness is
/// enforced by the redeem ledger on the destination chain.
pub fn execute_swap<C: TokenCustody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    token_id: u64,
    destination_chain_id: u64,
    nonce: u64,
) -> Result<Response, ContractError> {
    if !CHAIN_REGISTRY.is_supported(deps.storage, destination_chain_id) {
        return Err(ContractError::ChainNotSupported {
            chain_id: destination_chain_id,
        });
    }

    let owner = custody.owner_of(deps.as_ref(), token_id)?;
    if owner != info.sender {
        return Err(ContractError::NotTokenOwner { token_id });
    }

    let token_uri = custody.token_uri(deps.as_ref(), token_id)?;
    let bridge = env.contract.address;
    let lock_msg = custody.transfer_from(deps.as_ref(), &bridge, &info.sender, &bridge, token_id)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_swaps += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(lock_msg)
        .add_event(Event::from(BridgeEvent::SwapInitialized {
            token_id,
            owner: info.sender,
            destination_chain_id,
            nonce,
            token_uri,
        }))
        .add_attribute("method", "swap")
        .add_attribute("token_id", token_id.to_string()))
}
