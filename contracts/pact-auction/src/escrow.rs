use crate::storage;
use soroban_sdk::{token, Address, Env};

/// Refunds the displaced leading bid, if any, then pulls the new bid into
/// escrow. Both transfers happen inside the current invocation, so a failed
/// pull unwinds the refund along with the rest of the call.
pub fn hold_and_displace(
    env: &Env,
    currency: &Address,
    new_bidder: &Address,
    new_amount: i128,
    displaced: Option<(Address, i128)>,
) {
    let client = token::TokenClient::new(env, currency);
    let contract = env.current_contract_address();

    if let Some((previous_bidder, previous_amount)) = displaced {
        if previous_amount > 0 {
            client.transfer(&contract, &previous_bidder, &previous_amount);
        }
    }

    client.transfer(new_bidder, &contract, &new_amount);
    storage::set_escrow(env, new_amount);
}

/// Releases the full escrowed amount to `beneficiary` and clears the
/// escrow record. Returns the amount released.
pub fn release(env: &Env, currency: &Address, beneficiary: &Address) -> i128 {
    let amount = storage::get_escrow(env);
    if amount > 0 {
        let client = token::TokenClient::new(env, currency);
        client.transfer(&env.current_contract_address(), beneficiary, &amount);
    }
    storage::remove_escrow(env);
    amount
}
