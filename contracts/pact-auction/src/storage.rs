use crate::types::{AuctionState, DataKey, PactConfig};
use soroban_sdk::Env;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PactConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Option<PactConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_state(env: &Env, state: &AuctionState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> Option<AuctionState> {
    env.storage().instance().get(&DataKey::State)
}

/// Currency currently held by the contract on behalf of the leading bidder.
pub fn get_escrow(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Escrow).unwrap_or(0)
}

pub fn set_escrow(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Escrow, &amount);
}

pub fn remove_escrow(env: &Env) {
    env.storage().instance().remove(&DataKey::Escrow);
}
