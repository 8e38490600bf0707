//! NFT Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `custody` - Token contract adapter used by swap and redeem

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::address_codec::canonical_account;
use crate::custody::NftContract;
use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_add_chain, execute_cancel_admin_proposal,
    execute_propose_admin, execute_redeem, execute_remove_chain, execute_swap,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_fingerprint, query_config, query_is_chain_supported, query_is_redeemed,
    query_pending_admin, query_stats, query_supported_chains,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let validator = deps.api.addr_validate(&msg.validator)?;
    let nft_contract = deps.api.addr_validate(&msg.nft_contract)?;

    // Redeem signatures are checked against these bytes
    let validator_key = canonical_account(&validator)?;

    let config = Config {
        admin,
        validator,
        nft_contract,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("validator", config.validator)
        .add_attribute("validator_key", format!("0x{}", hex::encode(validator_key)))
        .add_attribute("nft_contract", config.nft_contract))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Chain registry
        ExecuteMsg::AddChain { chain_id } => execute_add_chain(deps, info, chain_id),
        ExecuteMsg::RemoveChain { chain_id } => execute_remove_chain(deps, info, chain_id),

        // Swap & redeem
        ExecuteMsg::Swap {
            token_id,
            destination_chain_id,
            nonce,
        } => {
            let custody = NftContract::new(CONFIG.load(deps.storage)?.nft_contract);
            execute_swap(
                deps,
                env,
                info,
                &custody,
                token_id,
                destination_chain_id,
                nonce,
            )
        }
        ExecuteMsg::Redeem {
            token_id,
            recipient,
            source_chain_id,
            nonce,
            token_uri,
            signature,
        } => {
            let custody = NftContract::new(CONFIG.load(deps.storage)?.nft_contract);
            execute_redeem(
                deps,
                env,
                info,
                &custody,
                token_id,
                recipient,
                source_chain_id,
                nonce,
                token_uri,
                signature,
            )
        }

        // Admin operations
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsChainSupported { chain_id } => {
            to_json_binary(&query_is_chain_supported(deps, chain_id)?)
        }
        QueryMsg::SupportedChains { start_after, limit } => {
            to_json_binary(&query_supported_chains(deps, start_after, limit)?)
        }
        QueryMsg::IsRedeemed { fingerprint } => {
            to_json_binary(&query_is_redeemed(deps, fingerprint)?)
        }
        QueryMsg::ComputeFingerprint {
            token_id,
            recipient,
            source_chain_id,
            nonce,
        } => to_json_binary(&query_compute_fingerprint(
            deps,
            token_id,
            recipient,
            source_chain_id,
            nonce,
        )?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
