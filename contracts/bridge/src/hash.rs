//! Redeem fingerprint computation
//!
//! The fingerprint binds the parameters of a single redeem and is the unit
//! of replay protection. It produces identical output to the EVM bridge's
//!
//! ```solidity
//! keccak256(abi.encodePacked(tokenId, recipient, sourceChainId, nonce))
//! ```
//!
//! # Byte Layout (116 bytes total)
//! - Bytes 0-31:   tokenId (uint256, big-endian, left-padded)
//! - Bytes 32-51:  recipient (20-byte canonical account)
//! - Bytes 52-83:  sourceChainId (uint256, big-endian, left-padded)
//! - Bytes 84-115: nonce (uint256, big-endian, left-padded)

use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// EIP-191 prefix for a signed 32-byte message
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode a u64 as a uint256 word (big-endian, left-padded)
pub fn u256_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Compute the redeem fingerprint
///
/// # Arguments
/// * `token_id` - Token id carried over from the source chain
/// * `recipient` - 20-byte canonical recipient account
/// * `source_chain_id` - Chain the token was swapped away from
/// * `nonce` - Swap nonce chosen on the source chain
pub fn compute_fingerprint(
    token_id: u64,
    recipient: &[u8; 20],
    source_chain_id: u64,
    nonce: u64,
) -> [u8; 32] {
    let mut data = [0u8; 116];

    data[0..32].copy_from_slice(&u256_word(token_id));
    data[32..52].copy_from_slice(recipient);
    data[52..84].copy_from_slice(&u256_word(source_chain_id));
    data[84..116].copy_from_slice(&u256_word(nonce));

    keccak256(&data)
}

/// Digest the validator actually signs: `keccak256(prefix ‖ fingerprint)`,
/// as produced by `eth_sign` / `signMessage` over the raw 32-byte fingerprint.
pub fn eth_signed_message_hash(fingerprint: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(fingerprint);
    keccak256(&data)
}

/// Convert 32-byte hash to 0x-prefixed hex (for attributes and errors)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a binary fingerprint into a fixed 32-byte array
pub fn parse_fingerprint(fingerprint: &Binary) -> Result<[u8; 32], ContractError> {
    fingerprint
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength {
            got: fingerprint.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hardhat_account_1() -> [u8; 20] {
        hex::decode("70997970c51812dc3a010c7d01b50e0d17dc79c8")
            .unwrap()
            .try_into()
            .unwrap()
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_u256_word_left_pads() {
        let word = u256_word(31337);
        assert_eq!(&word[..30], &[0u8; 30]);
        assert_eq!(&word[30..], &[0x7a, 0x69]);
    }

    /// Matches solidityKeccak256(["uint256","address","uint256","uint256"], [0, acct1, 31337, 1])
    #[test]
    fn test_fingerprint_matches_solidity_packed_encoding() {
        let fp = compute_fingerprint(0, &hardhat_account_1(), 31337, 1);
        assert_eq!(
            bytes32_to_hex(&fp),
            "0x3dccefc0304e897b4005679bc5bc25971ecb5aa93950016a82a7a25627734043"
        );
    }

    #[test]
    fn test_fingerprint_token_id_is_bound() {
        let fp = compute_fingerprint(2, &hardhat_account_1(), 31337, 1);
        assert_eq!(
            bytes32_to_hex(&fp),
            "0x341b796ab101aa08bd87293093090120e1745893dbba6b090dd0b510729c2e6e"
        );
    }

    #[test]
    fn test_fingerprint_field_order_matters() {
        let recipient = hardhat_account_1();
        // Swapping chain id and nonce must not collide
        assert_ne!(
            compute_fingerprint(0, &recipient, 31337, 1),
            compute_fingerprint(0, &recipient, 1, 31337)
        );
    }

    #[test]
    fn test_eth_signed_message_hash() {
        let fp = compute_fingerprint(0, &hardhat_account_1(), 31337, 1);
        assert_eq!(
            hex::encode(eth_signed_message_hash(&fp)),
            "f13a877c5eaf2bd000818eb497a2c723da7c1ed9b7b5d2e2f8fe2b8c65ff049b"
        );
    }

    #[test]
    fn test_parse_fingerprint_rejects_wrong_length() {
        let err = parse_fingerprint(&Binary::from(vec![0u8; 31])).unwrap_err();
        assert_eq!(err, ContractError::InvalidHashLength { got: 31 });

        let ok = parse_fingerprint(&Binary::from(vec![7u8; 32])).unwrap();
        assert_eq!(ok, [7u8; 32]);
    }
}
