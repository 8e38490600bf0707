use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ApprovalResponse, ContractInfoResponse, ExecuteMsg, ExistsResponse, InstantiateMsg,
    IsMinterResponse, IsOperatorResponse, MigrateMsg, NftInfoResponse, NumTokensResponse,
    OwnerOfResponse, QueryMsg,
};
use crate::state::{
    CollectionInfo, TokenInfo, ADMIN, COLLECTION, CONTRACT_NAME, CONTRACT_VERSION, MINTERS,
    NEXT_TOKEN_ID, OPERATORS, TOKENS, TOKEN_COUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    MINTERS.save(deps.storage, &admin, &true)?;
    COLLECTION.save(
        deps.storage,
        &CollectionInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
        },
    )?;
    NEXT_TOKEN_ID.save(deps.storage, &0u64)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            owner,
            token_uri,
            token_id,
        } => execute_mint(deps, info, owner, token_uri, token_id),
        ExecuteMsg::Approve { spender, token_id } => {
            execute_approve(deps, info, spender, token_id)
        }
        ExecuteMsg::Revoke { token_id } => execute_revoke(deps, info, token_id),
        ExecuteMsg::ApproveAll { operator } => execute_approve_all(deps, info, operator),
        ExecuteMsg::RevokeAll { operator } => execute_revoke_all(deps, info, operator),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            token_id,
        } => execute_transfer_from(deps, info, owner, recipient, token_id),
        ExecuteMsg::Burn { token_id } => execute_burn(deps, info, token_id),
        ExecuteMsg::AddMinter { minter } => execute_add_minter(deps, info, minter),
        ExecuteMsg::RemoveMinter { minter } => execute_remove_minter(deps, info, minter),
    }
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    token_uri: String,
    token_id: Option<u64>,
) -> Result<Response, ContractError> {
    if !MINTERS.has(deps.storage, &info.sender) {
        return Err(ContractError::NotMinter);
    }

    let owner = deps.api.addr_validate(&owner)?;
    let token_id = match token_id {
        Some(id) => {
            if TOKENS.has(deps.storage, id) {
                return Err(ContractError::TokenAlreadyExists { token_id: id });
            }
            id
        }
        None => next_free_id(deps.storage)?,
    };

    TOKENS.save(
        deps.storage,
        token_id,
        &TokenInfo {
            owner: owner.clone(),
            token_uri: token_uri.clone(),
            approved: None,
        },
    )?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("owner", owner)
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("token_uri", token_uri))
}

/// Returns the next auto-increment id that is not taken by an explicit mint,
/// and advances the counter past it.
fn next_free_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let mut candidate = NEXT_TOKEN_ID.load(storage)?;
    while TOKENS.has(storage, candidate) {
        candidate += 1;
    }
    NEXT_TOKEN_ID.save(storage, &(candidate + 1))?;
    Ok(candidate)
}

fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.storage, token_id)?;
    if !is_owner_or_operator(deps.storage, &token, &info.sender) {
        return Err(ContractError::TransferNotAuthorized { token_id });
    }

    let spender = deps.api.addr_validate(&spender)?;
    token.approved = Some(spender.clone());
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", token.owner)
        .add_attribute("spender", spender)
        .add_attribute("token_id", token_id.to_string()))
}

fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.storage, token_id)?;
    if !is_owner_or_operator(deps.storage, &token, &info.sender) {
        return Err(ContractError::TransferNotAuthorized { token_id });
    }

    token.approved = None;
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("token_id", token_id.to_string()))
}

fn execute_approve_all(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.save(deps.storage, (&info.sender, &operator), &true)?;

    Ok(Response::new()
        .add_attribute("action", "approve_all")
        .add_attribute("owner", info.sender)
        .add_attribute("operator", operator))
}

fn execute_revoke_all(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.remove(deps.storage, (&info.sender, &operator));

    Ok(Response::new()
        .add_attribute("action", "revoke_all")
        .add_attribute("owner", info.sender)
        .add_attribute("operator", operator))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.storage, token_id)?;

    if token.owner.as_str() != owner {
        return Err(ContractError::NotTokenOwner {
            token_id,
            claimed: owner,
        });
    }
    if !can_send(deps.storage, &token, &info.sender) {
        return Err(ContractError::TransferNotAuthorized { token_id });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let from = token.owner;
    token.owner = recipient.clone();
    token.approved = None;
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("sender", info.sender)
        .add_attribute("from", from)
        .add_attribute("to", recipient)
        .add_attribute("token_id", token_id.to_string()))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let token = load_token(deps.storage, token_id)?;
    if !can_send(deps.storage, &token, &info.sender) {
        return Err(ContractError::TransferNotAuthorized { token_id });
    }

    TOKENS.remove(deps.storage, token_id);
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<_> {
        Ok(count.saturating_sub(1))
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("owner", token.owner)
        .add_attribute("token_id", token_id.to_string()))
}

fn execute_add_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let minter = deps.api.addr_validate(&minter)?;
    MINTERS.save(deps.storage, &minter, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_minter")
        .add_attribute("minter", minter))
}

fn execute_remove_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let minter = deps.api.addr_validate(&minter)?;
    MINTERS.remove(deps.storage, &minter);

    Ok(Response::new()
        .add_attribute("action", "remove_minter")
        .add_attribute("minter", minter))
}

fn load_token(storage: &dyn Storage, token_id: u64) -> Result<TokenInfo, ContractError> {
    TOKENS
        .may_load(storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

fn is_owner_or_operator(storage: &dyn Storage, token: &TokenInfo, sender: &Addr) -> bool {
    token.owner == *sender || OPERATORS.has(storage, (&token.owner, sender))
}

fn can_send(storage: &dyn Storage, token: &TokenInfo, sender: &Addr) -> bool {
    is_owner_or_operator(storage, token, sender) || token.approved.as_ref() == Some(sender)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::Exists { token_id } => to_json_binary(&ExistsResponse {
            exists: TOKENS.has(deps.storage, token_id),
        }),
        QueryMsg::NftInfo { token_id } => to_json_binary(&query_nft_info(deps, token_id)?),
        QueryMsg::Approval { token_id, spender } => {
            to_json_binary(&query_approval(deps, token_id, spender)?)
        }
        QueryMsg::IsOperator { owner, operator } => {
            to_json_binary(&query_is_operator(deps, owner, operator)?)
        }
        QueryMsg::IsMinter { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&IsMinterResponse {
                is_minter: MINTERS.has(deps.storage, &address),
            })
        }
        QueryMsg::NumTokens {} => to_json_binary(&NumTokensResponse {
            count: TOKEN_COUNT.load(deps.storage)?,
        }),
        QueryMsg::ContractInfo {} => to_json_binary(&query_contract_info(deps)?),
    }
}

fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<OwnerOfResponse> {
    let token = TOKENS.load(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: token.owner.to_string(),
        approved: token.approved.map(|a| a.to_string()),
    })
}

fn query_nft_info(deps: Deps, token_id: u64) -> StdResult<NftInfoResponse> {
    let token = TOKENS.load(deps.storage, token_id)?;
    Ok(NftInfoResponse {
        token_id,
        token_uri: token.token_uri,
    })
}

fn query_approval(deps: Deps, token_id: u64, spender: String) -> StdResult<ApprovalResponse> {
    let spender = deps.api.addr_validate(&spender)?;
    let approved = match TOKENS.may_load(deps.storage, token_id)? {
        Some(token) => can_send(deps.storage, &token, &spender),
        None => false,
    };
    Ok(ApprovalResponse { approved })
}

fn query_is_operator(deps: Deps, owner: String, operator: String) -> StdResult<IsOperatorResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let operator = deps.api.addr_validate(&operator)?;
    Ok(IsOperatorResponse {
        approved: OPERATORS.has(deps.storage, (&owner, &operator)),
    })
}

fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    let admin = ADMIN.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: collection.name,
        symbol: collection.symbol,
        admin: admin.to_string(),
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
