use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not a minter")]
    NotMinter,

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("Token already exists: {token_id}")]
    TokenAlreadyExists { token_id: u64 },

    #[error("Transfer caller is not owner nor approved for token {token_id}")]
    TransferNotAuthorized { token_id: u64 },

    #[error("Token {token_id} is not owned by {claimed}")]
    NotTokenOwner { token_id: u64, claimed: String },
}
