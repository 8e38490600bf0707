//! Execute handlers for the NFT Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `registry` - AddChain and RemoveChain
//! - `swap` - Lock a token into custody for an outgoing transfer
//! - `redeem` - Validator-authorized settlement of an incoming transfer
//! - `admin` - Admin transfer (propose/accept/cancel)

mod admin;
mod redeem;
mod registry;
mod swap;

pub use admin::*;
pub use redeem::*;
pub use registry::*;
pub use swap::*;

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Load the config, failing with `Unauthorized` unless `sender` is the admin.
pub(crate) fn config_for_admin(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}
