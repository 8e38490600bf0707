//! Chain registry handlers.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use super::config_for_admin;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::state::CHAIN_REGISTRY;

/// Register a counterparty chain.
pub fn execute_add_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    config_for_admin(deps.storage, &info.sender)?;

    let changed = CHAIN_REGISTRY.add(deps.storage, chain_id)?;

    Ok(Response::new()
        .add_event(Event::from(BridgeEvent::ChainAdded { chain_id, changed }))
        .add_attribute("method", "add_chain")
        .add_attribute("chain_id", chain_id.to_string()))
}

/// Deregister a counterparty chain.
pub fn execute_remove_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    config_for_admin(deps.storage, &info.sender)?;

    let changed = CHAIN_REGISTRY.remove(deps.storage, chain_id);

    Ok(Response::new()
        .add_event(Event::from(BridgeEvent::ChainRemoved { chain_id, changed }))
        .add_attribute("method", "remove_chain")
        .add_attribute("chain_id", chain_id.to_string()))
}
