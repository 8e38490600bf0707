//! Integration tests for the swap and redeem flows.
//!
//! Two ledgers are simulated in one app: each has its own token contract
//! and bridge instance, registered as chain 31337 and chain 97. Validator
//! signatures are produced with a local secp256k1 signer, the same way the
//! off-chain validator signs.

use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use cosmwasm_std::{Addr, Binary};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use nft_bridge::address_codec::{decode_bech32_address, encode_bech32_address};
use nft_bridge::hash::{bytes32_to_hex, compute_fingerprint};
use nft_bridge::msg::{
    ExecuteMsg, FingerprintResponse, InstantiateMsg, IsRedeemedResponse, QueryMsg, StatsResponse,
};

use common::nft::{ExistsResponse, NftExecuteMsg, NftQueryMsg, OwnerOfResponse};

// ============================================================================
// Test Setup
// ============================================================================

/// Hardhat account #0, the validator key on every ledger
const VALIDATOR_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// Hardhat account #2, not the validator
const ROGUE_KEY: &str = "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

/// Hardhat account #1
const BOB: &str = "terra1wzvhjux9rqfdcwspp37srdgwp5tac7wgdj9dax";
/// Account 0x0102..14
const ALICE: &str = "terra1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5exk7yu";

const CHAIN_A: u64 = 31337;
const CHAIN_B: u64 = 97;

const TOKEN_URI: &str = "https://example.com/item-id-0.json";

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        nft_bridge::contract::execute,
        nft_bridge::contract::instantiate,
        nft_bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_nft() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        nft::contract::execute,
        nft::contract::instantiate,
        nft::contract::query,
    );
    Box::new(contract)
}

/// One simulated chain: a token contract and the bridge guarding it
struct Ledger {
    nft: Addr,
    bridge: Addr,
}

struct TestEnv {
    app: App,
    admin: Addr,
    validator: Addr,
    alice: Addr,
    bob: Addr,
    /// Chain 31337
    a: Ledger,
    /// Chain 97
    b: Ledger,
}

fn validator_signer() -> PrivateKeySigner {
    VALIDATOR_KEY.parse().unwrap()
}

fn validator_account() -> Addr {
    let raw: [u8; 20] = validator_signer().address().as_slice().try_into().unwrap();
    Addr::unchecked(encode_bech32_address(&raw, "terra").unwrap())
}

fn deploy_ledger(
    app: &mut App,
    admin: &Addr,
    validator: &Addr,
    nft_code: u64,
    bridge_code: u64,
    counterparty: u64,
) -> Ledger {
    let nft = app
        .instantiate_contract(
            nft_code,
            admin.clone(),
            &nft::msg::InstantiateMsg {
                admin: admin.to_string(),
                name: "Bridge Collection".to_string(),
                symbol: "BRG".to_string(),
            },
            &[],
            "nft",
            Some(admin.to_string()),
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                validator: validator.to_string(),
                nft_contract: nft.to_string(),
            },
            &[],
            "nft-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    // Bridge mints first arrivals
    app.execute_contract(
        admin.clone(),
        nft.clone(),
        &NftExecuteMsg::AddMinter {
            minter: bridge.to_string(),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        admin.clone(),
        bridge.clone(),
        &ExecuteMsg::AddChain {
            chain_id: counterparty,
        },
        &[],
    )
    .unwrap();

    Ledger { nft, bridge }
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let validator = validator_account();

    let nft_code = app.store_code(contract_nft());
    let bridge_code = app.store_code(contract_bridge());

    let a = deploy_ledger(&mut app, &admin, &validator, nft_code, bridge_code, CHAIN_B);
    let b = deploy_ledger(&mut app, &admin, &validator, nft_code, bridge_code, CHAIN_A);

    TestEnv {
        app,
        admin,
        validator,
        alice: Addr::unchecked(ALICE),
        bob: Addr::unchecked(BOB),
        a,
        b,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn sign_redeem(
    key: &str,
    token_id: u64,
    recipient: &str,
    source_chain_id: u64,
    nonce: u64,
) -> Binary {
    let signer: PrivateKeySigner = key.parse().unwrap();
    let fp = compute_fingerprint(
        token_id,
        &decode_bech32_address(recipient).unwrap(),
        source_chain_id,
        nonce,
    );
    let sig = signer.sign_message_sync(&fp).unwrap();
    Binary::from(sig.as_bytes().to_vec())
}

fn mint(env: &mut TestEnv, nft: &Addr, owner: &Addr, token_id: u64) {
    env.app
        .execute_contract(
            env.admin.clone(),
            nft.clone(),
            &NftExecuteMsg::Mint {
                owner: owner.to_string(),
                token_uri: TOKEN_URI.to_string(),
                token_id: Some(token_id),
            },
            &[],
        )
        .unwrap();
}

fn approve(env: &mut TestEnv, owner: &Addr, ledger_nft: &Addr, spender: &Addr, token_id: u64) {
    env.app
        .execute_contract(
            owner.clone(),
            ledger_nft.clone(),
            &NftExecuteMsg::Approve {
                spender: spender.to_string(),
                token_id,
            },
            &[],
        )
        .unwrap();
}

fn owner_of(env: &TestEnv, nft: &Addr, token_id: u64) -> String {
    let res: OwnerOfResponse = env
        .app
        .wrap()
        .query_wasm_smart(nft, &NftQueryMsg::OwnerOf { token_id })
        .unwrap();
    res.owner
}

fn token_exists(env: &TestEnv, nft: &Addr, token_id: u64) -> bool {
    let res: ExistsResponse = env
        .app
        .wrap()
        .query_wasm_smart(nft, &NftQueryMsg::Exists { token_id })
        .unwrap();
    res.exists
}

fn stats(env: &TestEnv, bridge: &Addr) -> StatsResponse {
    env.app
        .wrap()
        .query_wasm_smart(bridge, &QueryMsg::Stats {})
        .unwrap()
}

#[allow(clippy::too_many_arguments)]
fn redeem(
    env: &mut TestEnv,
    bridge: &Addr,
    sender: &Addr,
    token_id: u64,
    recipient: &str,
    source_chain_id: u64,
    nonce: u64,
    signature: Binary,
) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        bridge.clone(),
        &ExecuteMsg::Redeem {
            token_id,
            recipient: recipient.to_string(),
            source_chain_id,
            nonce,
            token_uri: TOKEN_URI.to_string(),
            signature,
        },
        &[],
    )
    .map_err(|err| err.root_cause().to_string())
}

fn swap(
    env: &mut TestEnv,
    bridge: &Addr,
    sender: &Addr,
    token_id: u64,
    destination_chain_id: u64,
    nonce: u64,
) -> Result<AppResponse, String> {
    env.app.execute_contract(
        sender.clone(),
        bridge.clone(),
        &ExecuteMsg::Swap {
            token_id,
            destination_chain_id,
            nonce,
        },
        &[],
    )
    .map_err(|err| err.root_cause().to_string())
}

fn event_attr(res: &AppResponse, event: &str, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == event)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing {}.{}", event, key))
}

// ============================================================================
// Swap Tests
// ============================================================================

#[test]
fn test_swap_locks_token_in_custody() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let alice = env.alice.clone();

    mint(&mut env, &nft_a, &alice, 0);
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);

    let res = swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 1).unwrap();

    assert_eq!(owner_of(&env, &nft_a, 0), bridge_a.to_string());
    assert_eq!(event_attr(&res, "wasm-swap_initialized", "token_id"), "0");
    assert_eq!(event_attr(&res, "wasm-swap_initialized", "owner"), ALICE);
    assert_eq!(
        event_attr(&res, "wasm-swap_initialized", "destination_chain_id"),
        "97"
    );
    assert_eq!(event_attr(&res, "wasm-swap_initialized", "nonce"), "1");
    assert_eq!(
        event_attr(&res, "wasm-swap_initialized", "token_uri"),
        TOKEN_URI
    );
    assert_eq!(stats(&env, &bridge_a).total_swaps, 1);
}

#[test]
fn test_swap_with_operator_approval() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let alice = env.alice.clone();

    mint(&mut env, &nft_a, &alice, 5);
    env.app
        .execute_contract(
            alice.clone(),
            nft_a.clone(),
            &NftExecuteMsg::ApproveAll {
                operator: bridge_a.to_string(),
            },
            &[],
        )
        .unwrap();

    swap(&mut env, &bridge_a, &alice, 5, CHAIN_B, 9).unwrap();
    assert_eq!(owner_of(&env, &nft_a, 5), bridge_a.to_string());
}

#[test]
fn test_swap_requires_approval() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let alice = env.alice.clone();

    mint(&mut env, &nft_a, &alice, 0);

    let err_str = swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 1).unwrap_err();
    assert!(
        err_str.contains("Transfer not authorized for token 0"),
        "Expected transfer authorization error, got: {}",
        err_str
    );
    assert_eq!(owner_of(&env, &nft_a, 0), ALICE);
    assert_eq!(stats(&env, &bridge_a).total_swaps, 0);
}

#[test]
fn test_swap_owner_check_precedes_approval_check() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let (alice, bob) = (env.alice.clone(), env.bob.clone());

    // Unapproved token, swapped by someone who does not own it
    mint(&mut env, &nft_a, &alice, 0);

    let err_str = swap(&mut env, &bridge_a, &bob, 0, CHAIN_B, 1).unwrap_err();
    assert!(
        err_str.contains("caller is not token owner of 0"),
        "Expected ownership error, got: {}",
        err_str
    );
}

#[test]
fn test_swap_rejects_token_approved_by_another_owner() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let (alice, bob) = (env.alice.clone(), env.bob.clone());

    // Bridge is approved for both tokens, alice only owns token 0
    mint(&mut env, &nft_a, &alice, 0);
    mint(&mut env, &nft_a, &bob, 1);
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);
    approve(&mut env, &bob, &nft_a, &bridge_a, 1);

    let err_str = swap(&mut env, &bridge_a, &alice, 1, CHAIN_B, 1).unwrap_err();
    assert!(
        err_str.contains("caller is not token owner of 1"),
        "Expected ownership error, got: {}",
        err_str
    );
    assert_eq!(owner_of(&env, &nft_a, 1), BOB);
    assert_eq!(owner_of(&env, &nft_a, 0), ALICE);
    assert_eq!(stats(&env, &bridge_a).total_swaps, 0);
}

#[test]
fn test_swap_to_unsupported_chain() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let alice = env.alice.clone();

    mint(&mut env, &nft_a, &alice, 0);
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);

    // Chain A does not list itself as a counterparty
    let err_str = swap(&mut env, &bridge_a, &alice, 0, CHAIN_A, 1).unwrap_err();
    assert!(err_str.contains("Given chain is not supported: 31337"));
    assert_eq!(owner_of(&env, &nft_a, 0), ALICE);
}

#[test]
fn test_swap_missing_token() {
    let mut env = setup();
    let bridge_a = env.a.bridge.clone();
    let alice = env.alice.clone();

    let err_str = swap(&mut env, &bridge_a, &alice, 42, CHAIN_B, 1).unwrap_err();
    assert!(err_str.contains("Token not found: 42"));
}

// ============================================================================
// Redeem Tests
// ============================================================================

#[test]
fn test_redeem_mints_first_arrival() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let validator = env.validator.clone();

    assert!(!token_exists(&env, &nft_b, 0));

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);
    let res = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig).unwrap();

    assert_eq!(owner_of(&env, &nft_b, 0), BOB);
    assert_eq!(event_attr(&res, "wasm-swap_redeemed", "settlement"), "mint");
    assert_eq!(event_attr(&res, "wasm-swap_redeemed", "recipient"), BOB);
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "source_chain_id"),
        "31337"
    );

    let expected_fp = compute_fingerprint(0, &decode_bech32_address(BOB).unwrap(), CHAIN_A, 1);
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "fingerprint"),
        bytes32_to_hex(&expected_fp)
    );
    assert_eq!(
        bytes32_to_hex(&expected_fp),
        "0x3dccefc0304e897b4005679bc5bc25971ecb5aa93950016a82a7a25627734043"
    );

    let s = stats(&env, &bridge_b);
    assert_eq!(s.total_redeems, 1);
    assert_eq!(s.total_minted, 1);
    assert_eq!(s.total_released, 0);
}

#[test]
fn test_redeem_releases_custodied_token() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let validator = env.validator.clone();

    // Token 2 already sits in bridge custody
    mint(&mut env, &nft_b, &bridge_b, 2);

    let sig = sign_redeem(VALIDATOR_KEY, 2, BOB, CHAIN_A, 1);
    let res = redeem(&mut env, &bridge_b, &validator, 2, BOB, CHAIN_A, 1, sig).unwrap();

    assert_eq!(owner_of(&env, &nft_b, 2), BOB);
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "settlement"),
        "release"
    );
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "fingerprint"),
        "0x341b796ab101aa08bd87293093090120e1745893dbba6b090dd0b510729c2e6e"
    );
    assert_eq!(stats(&env, &bridge_b).total_released, 1);
}

#[test]
fn test_redeem_rejects_token_outside_custody() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let (validator, alice) = (env.validator.clone(), env.alice.clone());

    mint(&mut env, &nft_b, &alice, 2);

    let sig = sign_redeem(VALIDATOR_KEY, 2, BOB, CHAIN_A, 1);
    let err_str = redeem(&mut env, &bridge_b, &validator, 2, BOB, CHAIN_A, 1, sig).unwrap_err();
    assert!(err_str.contains("Transfer not authorized for token 2"));
    assert_eq!(owner_of(&env, &nft_b, 2), ALICE);
}

#[test]
fn test_redeem_only_by_validator() {
    let mut env = setup();
    let bridge_b = env.b.bridge.clone();
    let bob = env.bob.clone();

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);
    let err_str = redeem(&mut env, &bridge_b, &bob, 0, BOB, CHAIN_A, 1, sig).unwrap_err();
    assert!(err_str.contains("caller is not the validator"));
}

#[test]
fn test_redeem_rejects_foreign_signature() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let validator = env.validator.clone();

    let sig = sign_redeem(ROGUE_KEY, 0, BOB, CHAIN_A, 1);
    let err_str = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig).unwrap_err();
    assert!(
        err_str.contains("Invalid sign"),
        "Expected signature error, got: {}",
        err_str
    );
    assert!(!token_exists(&env, &nft_b, 0));
}

#[test]
fn test_redeem_signature_does_not_transfer_to_other_recipient() {
    let mut env = setup();
    let bridge_b = env.b.bridge.clone();
    let validator = env.validator.clone();

    // Authorized for bob, submitted for alice
    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);
    let err_str = redeem(&mut env, &bridge_b, &validator, 0, ALICE, CHAIN_A, 1, sig).unwrap_err();
    assert!(err_str.contains("Invalid sign"));
}

#[test]
fn test_redeem_from_unsupported_chain() {
    let mut env = setup();
    let bridge_b = env.b.bridge.clone();
    let validator = env.validator.clone();

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, 56, 1);
    let err_str = redeem(&mut env, &bridge_b, &validator, 0, BOB, 56, 1, sig).unwrap_err();
    assert!(err_str.contains("Given chain is not supported: 56"));
}

#[test]
fn test_redeem_replay_rejected() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let validator = env.validator.clone();
    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);

    let fp_query = QueryMsg::ComputeFingerprint {
        token_id: 0,
        recipient: BOB.to_string(),
        source_chain_id: CHAIN_A,
        nonce: 1,
    };
    let fp: FingerprintResponse = env
        .app
        .wrap()
        .query_wasm_smart(&bridge_b, &fp_query)
        .unwrap();
    let is_redeemed = |env: &TestEnv| -> bool {
        let res: IsRedeemedResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                &bridge_b,
                &QueryMsg::IsRedeemed {
                    fingerprint: fp.fingerprint.clone(),
                },
            )
            .unwrap();
        res.redeemed
    };

    assert!(!is_redeemed(&env));
    redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig.clone()).unwrap();
    assert!(is_redeemed(&env));

    // Put the token back in custody so only the ledger can stop the replay
    let bob = env.bob.clone();
    env.app
        .execute_contract(
            bob,
            nft_b.clone(),
            &NftExecuteMsg::TransferFrom {
                owner: BOB.to_string(),
                recipient: bridge_b.to_string(),
                token_id: 0,
            },
            &[],
        )
        .unwrap();

    let err_str = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig).unwrap_err();
    assert!(
        err_str.contains("You can not redeem token twice"),
        "Expected replay error, got: {}",
        err_str
    );
    assert_eq!(owner_of(&env, &nft_b, 0), bridge_b.to_string());
    assert_eq!(stats(&env, &bridge_b).total_redeems, 1);
}

#[test]
fn test_failed_settlement_rolls_back_ledger() {
    let mut env = setup();
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let (admin, validator) = (env.admin.clone(), env.validator.clone());

    // Bridge loses the minter role, so the mint submessage fails
    env.app
        .execute_contract(
            admin,
            nft_b.clone(),
            &NftExecuteMsg::RemoveMinter {
                minter: bridge_b.to_string(),
            },
            &[],
        )
        .unwrap();

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);
    let err_str = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig).unwrap_err();
    assert!(err_str.contains("not a minter"));

    let fp = compute_fingerprint(0, &decode_bech32_address(BOB).unwrap(), CHAIN_A, 1);
    let res: IsRedeemedResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &bridge_b,
            &QueryMsg::IsRedeemed {
                fingerprint: Binary::from(fp.to_vec()),
            },
        )
        .unwrap();
    assert!(!res.redeemed);
    assert_eq!(stats(&env, &bridge_b).total_redeems, 0);
}

// ============================================================================
// Registry Effects
// ============================================================================

#[test]
fn test_removed_chain_blocks_swap_and_redeem_until_readded() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let (admin, alice, validator) = (env.admin.clone(), env.alice.clone(), env.validator.clone());

    mint(&mut env, &nft_a, &alice, 0);
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);

    env.app
        .execute_contract(
            admin.clone(),
            bridge_a.clone(),
            &ExecuteMsg::RemoveChain { chain_id: CHAIN_B },
            &[],
        )
        .unwrap();

    let err_str = swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 1).unwrap_err();
    assert!(
        err_str.contains("Given chain is not supported: 97"),
        "Expected unsupported chain error, got: {}",
        err_str
    );

    let sig = sign_redeem(VALIDATOR_KEY, 7, ALICE, CHAIN_B, 1);
    let err_str =
        redeem(&mut env, &bridge_a, &validator, 7, ALICE, CHAIN_B, 1, sig.clone()).unwrap_err();
    assert!(
        err_str.contains("Given chain is not supported: 97"),
        "Expected unsupported chain error, got: {}",
        err_str
    );
    assert!(!token_exists(&env, &nft_a, 7));

    env.app
        .execute_contract(
            admin,
            bridge_a.clone(),
            &ExecuteMsg::AddChain { chain_id: CHAIN_B },
            &[],
        )
        .unwrap();

    swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 1).unwrap();
    assert_eq!(owner_of(&env, &nft_a, 0), bridge_a.to_string());

    redeem(&mut env, &bridge_a, &validator, 7, ALICE, CHAIN_B, 1, sig).unwrap();
    assert_eq!(owner_of(&env, &nft_a, 7), ALICE);
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_round_trip_between_ledgers() {
    let mut env = setup();
    let (nft_a, bridge_a) = (env.a.nft.clone(), env.a.bridge.clone());
    let (nft_b, bridge_b) = (env.b.nft.clone(), env.b.bridge.clone());
    let (alice, bob, validator) = (env.alice.clone(), env.bob.clone(), env.validator.clone());

    // A -> B: lock on A, mint on B
    mint(&mut env, &nft_a, &alice, 0);
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);
    swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 1).unwrap();

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 1);
    let res = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 1, sig).unwrap();
    assert_eq!(event_attr(&res, "wasm-swap_redeemed", "settlement"), "mint");
    assert_eq!(owner_of(&env, &nft_a, 0), bridge_a.to_string());
    assert_eq!(owner_of(&env, &nft_b, 0), BOB);

    // B -> A: lock on B, release on A
    approve(&mut env, &bob, &nft_b, &bridge_b, 0);
    swap(&mut env, &bridge_b, &bob, 0, CHAIN_A, 2).unwrap();

    let sig = sign_redeem(VALIDATOR_KEY, 0, ALICE, CHAIN_B, 2);
    let res = redeem(&mut env, &bridge_a, &validator, 0, ALICE, CHAIN_B, 2, sig).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "settlement"),
        "release"
    );
    assert_eq!(owner_of(&env, &nft_a, 0), ALICE);
    assert_eq!(owner_of(&env, &nft_b, 0), bridge_b.to_string());

    // A -> B again: B now releases from custody instead of minting
    approve(&mut env, &alice, &nft_a, &bridge_a, 0);
    swap(&mut env, &bridge_a, &alice, 0, CHAIN_B, 3).unwrap();

    let sig = sign_redeem(VALIDATOR_KEY, 0, BOB, CHAIN_A, 3);
    let res = redeem(&mut env, &bridge_b, &validator, 0, BOB, CHAIN_A, 3, sig).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-swap_redeemed", "settlement"),
        "release"
    );
    assert_eq!(owner_of(&env, &nft_b, 0), BOB);

    let a = stats(&env, &bridge_a);
    assert_eq!((a.total_swaps, a.total_redeems, a.total_released), (2, 1, 1));
    let b = stats(&env, &bridge_b);
    assert_eq!(
        (b.total_swaps, b.total_redeems, b.total_minted, b.total_released),
        (1, 2, 1, 1)
    );
}
