//! NFT Bridge Contract
//!
//! Moves non-fungible tokens between chains, one token at a time. Each chain
//! runs one bridge instance next to one token contract.
//!
//! ## Flow
//! 1. **Swap** - The owner locks a token into bridge custody; the contract
//!    emits `swap_initialized` with the destination chain and nonce
//! 2. **Relay** - Off-chain, the validator observes the event and signs the
//!    redeem fingerprint `keccak256(tokenId ‖ recipient ‖ sourceChainId ‖ nonce)`
//! 3. **Redeem** - On the destination chain the validator submits the signed
//!    redeem; the bridge releases the token from custody or mints it, and
//!    records the fingerprint so it can never settle twice
//!
//! ## Security Model
//! - Only the admin edits the set of supported chains
//! - Only the validator submits redeems, and the signature must recover to
//!   the validator's key
//! - Fingerprints are byte-compatible with the EVM deployment's
//!   `abi.encodePacked` hash, so one validator key serves every chain

pub mod address_codec;
pub mod contract;
pub mod custody;
pub mod error;
pub mod events;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
