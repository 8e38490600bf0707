//! Admin handover (propose/accept/cancel).
//!
//! The admin role moves in two steps separated by `ADMIN_TIMELOCK_DURATION`.
//! The validator is fixed at instantiation and never moves.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdResult};

use super::config_for_admin;
use crate::error::ContractError;
use crate::state::{PendingAdmin, ADMIN_TIMELOCK_DURATION, CONFIG, PENDING_ADMIN};

/// Nominate a successor. Replaces any earlier nomination and restarts the clock.
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    config_for_admin(deps.storage, &info.sender)?;

    let proposal = PendingAdmin {
        new_address: deps.api.addr_validate(&new_admin)?,
        execute_after: env.block.time.plus_seconds(ADMIN_TIMELOCK_DURATION),
    };
    PENDING_ADMIN.save(deps.storage, &proposal)?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", proposal.new_address)
        .add_attribute("execute_after", proposal.execute_after.seconds().to_string()))
}

/// Take over the admin role once the nomination has matured.
pub fn execute_accept_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let Some(proposal) = PENDING_ADMIN.may_load(deps.storage)? else {
        return Err(ContractError::NoPendingAdmin);
    };
    if info.sender != proposal.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    let now = env.block.time.seconds();
    let unlocks_at = proposal.execute_after.seconds();
    if now < unlocks_at {
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: unlocks_at - now,
        });
    }

    let previous_admin = CONFIG.load(deps.storage)?.admin;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.admin = proposal.new_address.clone();
        Ok(config)
    })?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("previous_admin", previous_admin)
        .add_attribute("new_admin", proposal.new_address))
}

/// Withdraw the current nomination. A no-op when there is none.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    config_for_admin(deps.storage, &info.sender)?;
    let had_proposal = PENDING_ADMIN.may_load(deps.storage)?.is_some();
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "cancel_admin_proposal")
        .add_attribute("cancelled", had_proposal.to_string()))
}
