//! Canonical account bytes
//!
//! Accounts are hashed and compared in their 20-byte canonical form: the
//! payload of the bech32 encoding. An `eth_secp256k1` account and the EVM
//! address of the same key share these 20 bytes, which is what lets one
//! validator key authorize redeems on both kinds of ledger.

use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::Addr;

use crate::error::ContractError;

/// Decode a bech32 address (e.g. `terra1...`) into its 20 raw bytes
pub fn decode_bech32_address(addr: &str) -> Result<[u8; 20], ContractError> {
    let (_hrp, data, _variant) =
        bech32::decode(addr).map_err(|e| ContractError::InvalidAddress {
            reason: format!("{}: {}", addr, e),
        })?;

    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| ContractError::InvalidAddress {
        reason: format!("{}: {}", addr, e),
    })?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidAddress {
            reason: format!("{}: expected 20-byte account, got {} bytes", addr, bytes.len()),
        })
}

/// Canonical bytes of a validated address
pub fn canonical_account(addr: &Addr) -> Result<[u8; 20], ContractError> {
    decode_bech32_address(addr.as_str())
}

/// Encode 20 raw bytes as a bech32 address with the given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> Result<String, ContractError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32).map_err(|e| {
        ContractError::InvalidAddress {
            reason: e.to_string(),
        }
    })
}
