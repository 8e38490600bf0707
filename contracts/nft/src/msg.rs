use cosmwasm_schema::cw_serde;

pub use common::nft::{
    ApprovalResponse, ContractInfoResponse, ExistsResponse, IsMinterResponse,
    IsOperatorResponse, NftExecuteMsg as ExecuteMsg, NftInfoResponse,
    NftQueryMsg as QueryMsg, NumTokensResponse, OwnerOfResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who manages minters; also the initial minter
    pub admin: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct MigrateMsg {}
