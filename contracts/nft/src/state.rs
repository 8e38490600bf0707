use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:nft";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct TokenInfo {
    pub owner: Addr,
    pub token_uri: String,
    /// Single-token approval, cleared on every transfer
    pub approved: Option<Addr>,
}

pub const ADMIN: Item<Addr> = Item::new("admin");

pub const COLLECTION: Item<CollectionInfo> = Item::new("collection");

/// Next candidate id for auto-increment minting
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");

pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// token_id => token info
pub const TOKENS: Map<u64, TokenInfo> = Map::new("tokens");

/// minter address => active
pub const MINTERS: Map<&Addr, bool> = Map::new("minters");

/// (owner, operator) => approved for all of owner's tokens
pub const OPERATORS: Map<(&Addr, &Addr), bool> = Map::new("operators");
