//! NFT contract interface.
//!
//! Token ids are plain `u64` values. They are assigned either by the
//! contract's auto-increment counter or explicitly by a minter (the bridge
//! mints with the id carried over from the source chain).

use cosmwasm_schema::{cw_serde, QueryResponses};

/// Execute messages understood by the NFT contract
#[cw_serde]
pub enum NftExecuteMsg {
    /// Mint a new token
    ///
    /// Authorization: Minter only
    ///
    /// With `token_id: None` the next free auto-increment id is used.
    /// An explicit id must not exist yet.
    Mint {
        owner: String,
        token_uri: String,
        token_id: Option<u64>,
    },

    /// Allow `spender` to transfer a single token
    ///
    /// Authorization: Owner or operator of the owner
    Approve { spender: String, token_id: u64 },

    /// Clear the single-token approval
    ///
    /// Authorization: Owner or operator of the owner
    Revoke { token_id: u64 },

    /// Allow `operator` to transfer every token of the sender
    ApproveAll { operator: String },

    /// Withdraw an operator approval
    RevokeAll { operator: String },

    /// Move `token_id` from `owner` to `recipient`
    ///
    /// Authorization: Owner, approved spender, or operator of the owner.
    /// `owner` must match the current owner. The single-token approval is
    /// cleared on transfer.
    TransferFrom {
        owner: String,
        recipient: String,
        token_id: u64,
    },

    /// Destroy a token
    ///
    /// Authorization: Owner, approved spender, or operator of the owner
    Burn { token_id: u64 },

    /// Grant the minter role
    ///
    /// Authorization: Admin only
    AddMinter { minter: String },

    /// Revoke the minter role
    ///
    /// Authorization: Admin only
    RemoveMinter { minter: String },
}

/// Query messages understood by the NFT contract
#[cw_serde]
#[derive(QueryResponses)]
pub enum NftQueryMsg {
    /// Current owner and single-token approval. Errors if the token does not exist.
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },

    /// Whether the token exists
    #[returns(ExistsResponse)]
    Exists { token_id: u64 },

    /// Token metadata. Errors if the token does not exist.
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },

    /// Whether `spender` may transfer `token_id` (approval or operator)
    #[returns(ApprovalResponse)]
    Approval { token_id: u64, spender: String },

    /// Whether `operator` may transfer every token of `owner`
    #[returns(IsOperatorResponse)]
    IsOperator { owner: String, operator: String },

    /// Whether `address` holds the minter role
    #[returns(IsMinterResponse)]
    IsMinter { address: String },

    /// Number of tokens currently in existence
    #[returns(NumTokensResponse)]
    NumTokens {},

    /// Collection name, symbol and admin
    #[returns(ContractInfoResponse)]
    ContractInfo {},
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
    pub approved: Option<String>,
}

#[cw_serde]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub token_uri: String,
}

#[cw_serde]
pub struct ApprovalResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct IsOperatorResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct IsMinterResponse {
    pub is_minter: bool,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
    pub admin: String,
}
