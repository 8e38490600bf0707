//! Incoming redeem handler.
//!
//! The validator submits the redeem and signs its fingerprint. The
//! fingerprint is the unit of replay protection: once recorded in the
//! redeem ledger the same (token, recipient, source chain, nonce) tuple can
//! never settle again. Every check runs before the first write.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response};

use crate::address_codec::canonical_account;
use crate::custody::TokenCustody;
use crate::error::ContractError;
use crate::events::{BridgeEvent, Settlement};
use crate::hash::{bytes32_to_hex, compute_fingerprint};
use crate::signature::verify_validator_signature;
use crate::state::{CHAIN_REGISTRY, CONFIG, REDEEM_LEDGER, STATS};

/// Settle a swap made on `source_chain_id`.
///
/// Releases the token from custody when the bridge already holds it,
/// otherwise mints it with the carried-over id and URI.
#[allow(clippy::too_many_arguments)]
pub fn execute_redeem<C: TokenCustody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    token_id: u64,
    recipient: String,
    source_chain_id: u64,
    nonce: u64,
    token_uri: String,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.validator {
        return Err(ContractError::NotValidator);
    }

    if !CHAIN_REGISTRY.is_supported(deps.storage, source_chain_id) {
        return Err(ContractError::ChainNotSupported {
            chain_id: source_chain_id,
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let fingerprint = compute_fingerprint(
        token_id,
        &canonical_account(&recipient)?,
        source_chain_id,
        nonce,
    );

    let validator = canonical_account(&config.validator)?;
    verify_validator_signature(deps.api, &fingerprint, &signature, &validator)?;

    if REDEEM_LEDGER.is_redeemed(deps.storage, &fingerprint)? {
        return Err(ContractError::AlreadyRedeemed {
            fingerprint: bytes32_to_hex(&fingerprint),
        });
    }

    let bridge = env.contract.address;
    let (settle_msg, settlement) = if custody.exists(deps.as_ref(), token_id)? {
        let msg = custody.transfer_from(deps.as_ref(), &bridge, &bridge, &recipient, token_id)?;
        (msg, Settlement::Release)
    } else {
        let msg = custody.mint(deps.as_ref(), &recipient, token_uri, token_id)?;
        (msg, Settlement::Mint)
    };

    REDEEM_LEDGER.mark_redeemed(deps.storage, &fingerprint)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_redeems += 1;
    match settlement {
        Settlement::Mint => stats.total_minted += 1,
        Settlement::Release => stats.total_released += 1,
    }
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(settle_msg)
        .add_event(Event::from(BridgeEvent::SwapRedeemed {
            token_id,
            recipient,
            source_chain_id,
            fingerprint,
            settlement,
        }))
        .add_attribute("method", "redeem")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("settlement", settlement.as_str()))
}
