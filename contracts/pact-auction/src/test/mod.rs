
use crate::{PactAuction, PactAuctionClient};
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};

pub const TOKEN_ID: u128 = 7;
pub const TOTAL_SUPPLY: i128 = 1_000_000;
pub const ALLOWED_AT: u64 = 1_000;
pub const COMPLETE_WAIT: u64 = 600;
pub const DELTA_PERMILLE: u32 = 10;

/// Stand-in for the ownership registry collaborator: one owner slot per
/// token id, transferable by anyone (auth is the real registry's concern).
#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn set_owner(env: Env, token_id: u128, owner: Address) {
        env.storage().instance().set(&token_id, &owner);
    }

    pub fn owner_of(env: Env, token_id: u128) -> Address {
        env.storage().instance().get(&token_id).unwrap()
    }

    pub fn transfer_control(env: Env, token_id: u128, new_owner: Address) {
        env.storage().instance().set(&token_id, &new_owner);
    }
}

pub fn setup_test() -> (
    Env,
    PactAuctionClient<'static>,
    MockRegistryClient<'static>,
    Address,
    token::TokenClient<'static>,
) {
    setup_test_with_wait(COMPLETE_WAIT)
}

pub fn setup_test_with_wait(
    complete_wait: u64,
) -> (
    Env,
    PactAuctionClient<'static>,
    MockRegistryClient<'static>,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, PactAuction);
    let client = PactAuctionClient::new(&env, &contract_id);

    let registry_id = env.register_contract(None, MockRegistry);
    let registry = MockRegistryClient::new(&env, &registry_id);

    let holder = Address::generate(&env);
    registry.set_owner(&TOKEN_ID, &holder);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_client = token::TokenClient::new(&env, &token_contract.address());

    client.initialize(
        &registry_id,
        &TOKEN_ID,
        &TOTAL_SUPPLY,
        &token_client.address,
        &ALLOWED_AT,
        &complete_wait,
        &DELTA_PERMILLE,
    );

    (env, client, registry, holder, token_client)
}

pub fn fund_bidder(env: &Env, token: &token::TokenClient, amount: i128) -> Address {
    let bidder = Address::generate(env);
    let asset_admin = token::StellarAssetClient::new(env, &token.address);
    asset_admin.mint(&bidder, &amount);
    bidder
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 20,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    set_time(env, env.ledger().timestamp() + seconds);
}

/// Moves time to `ALLOWED_AT` and opens the auction.
pub fn open_at_allowed(env: &Env, client: &PactAuctionClient) {
    set_time(env, ALLOWED_AT);
    client.open_auction();
}
