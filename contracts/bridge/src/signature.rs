//! Validator signature recovery
//!
//! Redeem authorizations are secp256k1 signatures in the Ethereum
//! `r ‖ s ‖ v` layout over the EIP-191 digest of the fingerprint. The public
//! key is recovered with the host crypto API and reduced to its 20-byte
//! address, `keccak256(pubkey[1..65])[12..32]`.

use cosmwasm_std::{Api, Binary};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, eth_signed_message_hash, keccak256};

/// Length of an `r ‖ s ‖ v` signature
pub const SIGNATURE_LENGTH: usize = 65;

/// Derive the 20-byte address of an uncompressed secp256k1 public key
pub fn pubkey_to_address(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Normalize `v` to a recovery param. Accepts both raw (0/1) and
/// Ethereum-offset (27/28) forms.
fn recovery_param(v: u8) -> Option<u8> {
    match v {
        0 | 1 => Some(v),
        27 | 28 => Some(v - 27),
        _ => None,
    }
}

/// Recover the address that signed `fingerprint`
pub fn recover_signer(
    api: &dyn Api,
    fingerprint: &[u8; 32],
    signature: &Binary,
) -> Result<[u8; 20], ContractError> {
    let invalid = |reason: String| ContractError::InvalidSignature {
        fingerprint: bytes32_to_hex(fingerprint),
        reason,
    };

    if signature.len() != SIGNATURE_LENGTH {
        return Err(invalid(format!(
            "expected {} byte signature, got {}",
            SIGNATURE_LENGTH,
            signature.len()
        )));
    }

    let v = signature[64];
    let param = recovery_param(v).ok_or_else(|| invalid(format!("unsupported v value {}", v)))?;

    let digest = eth_signed_message_hash(fingerprint);
    let pubkey = api
        .secp256k1_recover_pubkey(&digest, &signature[..64], param)
        .map_err(|e| invalid(e.to_string()))?;

    pubkey_to_address(&pubkey).ok_or_else(|| invalid("recovered malformed public key".to_string()))
}

/// Check that `signature` over `fingerprint` was produced by `validator`
pub fn verify_validator_signature(
    api: &dyn Api,
    fingerprint: &[u8; 32],
    signature: &Binary,
    validator: &[u8; 20],
) -> Result<(), ContractError> {
    let signer = recover_signer(api, fingerprint, signature)?;
    if signer != *validator {
        return Err(ContractError::InvalidSignature {
            fingerprint: bytes32_to_hex(fingerprint),
            reason: format!("signed by 0x{}, not the validator", hex::encode(signer)),
        });
    }
    Ok(())
}
