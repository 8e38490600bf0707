//! Token custody adapter
//!
//! The bridge never touches token ownership directly. Everything it needs
//! from the token contract goes through [`TokenCustody`]: ownership and
//! metadata reads, plus the transfer and mint messages that settle a swap
//! or a redeem. Message builders validate the same preconditions the token
//! contract enforces, so a failing swap or redeem reports a bridge error
//! instead of a nested submessage failure.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Deps, WasmMsg};

use crate::error::ContractError;
use common::nft::{
    ApprovalResponse, ExistsResponse, NftExecuteMsg, NftInfoResponse, NftQueryMsg,
    OwnerOfResponse,
};

/// Capabilities the bridge requires from the token ledger
pub trait TokenCustody {
    /// Current owner. Fails with `TokenNotFound` if the token does not exist.
    fn owner_of(&self, deps: Deps, token_id: u64) -> Result<Addr, ContractError>;

    fn exists(&self, deps: Deps, token_id: u64) -> Result<bool, ContractError>;

    /// Metadata URI. Fails with `TokenNotFound` if the token does not exist.
    fn token_uri(&self, deps: Deps, token_id: u64) -> Result<String, ContractError>;

    /// Build a transfer of `token_id` from `from` to `to`, executed by `operator`.
    ///
    /// Fails with `TransferNotAuthorized` if `from` is not the owner, or if
    /// `operator` is neither the owner nor approved for the token.
    fn transfer_from(
        &self,
        deps: Deps,
        operator: &Addr,
        from: &Addr,
        to: &Addr,
        token_id: u64,
    ) -> Result<CosmosMsg, ContractError>;

    /// Build a mint of `token_id` to `to`. Fails with `TokenAlreadyExists`.
    fn mint(
        &self,
        deps: Deps,
        to: &Addr,
        token_uri: String,
        token_id: u64,
    ) -> Result<CosmosMsg, ContractError>;
}

// ============================================================================
// Token Contract Adapter
// ============================================================================

/// Custody backed by a token contract speaking the `common::nft` interface
pub struct NftContract {
    pub addr: Addr,
}

impl NftContract {
    pub fn new(addr: Addr) -> Self {
        Self { addr }
    }

    fn execute_msg(&self, msg: &NftExecuteMsg) -> Result<CosmosMsg, ContractError> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }
        .into())
    }
}

impl TokenCustody for NftContract {
    fn owner_of(&self, deps: Deps, token_id: u64) -> Result<Addr, ContractError> {
        if !self.exists(deps, token_id)? {
            return Err(ContractError::TokenNotFound { token_id });
        }
        let res: OwnerOfResponse = deps
            .querier
            .query_wasm_smart(self.addr.to_string(), &NftQueryMsg::OwnerOf { token_id })?;
        Ok(Addr::unchecked(res.owner))
    }

    fn exists(&self, deps: Deps, token_id: u64) -> Result<bool, ContractError> {
        let res: ExistsResponse = deps
            .querier
            .query_wasm_smart(self.addr.to_string(), &NftQueryMsg::Exists { token_id })?;
        Ok(res.exists)
    }

    fn token_uri(&self, deps: Deps, token_id: u64) -> Result<String, ContractError> {
        if !self.exists(deps, token_id)? {
            return Err(ContractError::TokenNotFound { token_id });
        }
        let res: NftInfoResponse = deps
            .querier
            .query_wasm_smart(self.addr.to_string(), &NftQueryMsg::NftInfo { token_id })?;
        Ok(res.token_uri)
    }

    fn transfer_from(
        &self,
        deps: Deps,
        operator: &Addr,
        from: &Addr,
        to: &Addr,
        token_id: u64,
    ) -> Result<CosmosMsg, ContractError> {
        let owner = self.owner_of(deps, token_id)?;
        if owner != *from {
            return Err(ContractError::TransferNotAuthorized {
                token_id,
                reason: format!("{} does not own the token", from),
            });
        }

        if operator != from {
            let res: ApprovalResponse = deps.querier.query_wasm_smart(
                self.addr.to_string(),
                &NftQueryMsg::Approval {
                    token_id,
                    spender: operator.to_string(),
                },
            )?;
            if !res.approved {
                return Err(ContractError::TransferNotAuthorized {
                    token_id,
                    reason: format!("{} is not approved by {}", operator, from),
                });
            }
        }

        self.execute_msg(&NftExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: to.to_string(),
            token_id,
        })
    }

    fn mint(
        &self,
        deps: Deps,
        to: &Addr,
        token_uri: String,
        token_id: u64,
    ) -> Result<CosmosMsg, ContractError> {
        if self.exists(deps, token_id)? {
            return Err(ContractError::TokenAlreadyExists { token_id });
        }

        self.execute_msg(&NftExecuteMsg::Mint {
            owner: to.to_string(),
            token_uri,
            token_id: Some(token_id),
        })
    }
}

// ============================================================================
// In-memory custody for unit tests
// ============================================================================
