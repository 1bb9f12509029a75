use soroban_sdk::{contractclient, Address, Env};

/// Interface of the contract that resolves and transfers control of the
/// parent token the pact derives from.
#[contractclient(name = "OwnershipRegistryClient")]
pub trait OwnershipRegistry {
    fn owner_of(env: Env, token_id: u128) -> Address;

    fn transfer_control(env: Env, token_id: u128, new_owner: Address);
}
