//! Reference NFT Contract
//!
//! A minimal ERC-721 style collection: minter roles, mint with an
//! auto-increment or explicit id, per-token and operator approvals,
//! owner-checked transfers and burns. The NFT bridge takes custody of and
//! mints tokens in this contract through the `common::nft` interface.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
