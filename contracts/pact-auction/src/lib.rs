#![no_std]

mod errors;
mod escrow;
mod events;
mod registry;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use crate::errors::Error;
use crate::registry::OwnershipRegistryClient;
use crate::types::{AuctionPhase, AuctionState, PactConfig};

/// Floor for the very first bid.
const STARTING_MIN_BID: i128 = 1;

const PERMILLE_DENOMINATOR: i128 = 1000;

/// Time-boxed English auction transferring control of a pact, a
/// time-limited right derived from a parent token, to the highest bidder.
///
/// One contract instance runs one auction: Unopened until
/// `auction_allowed_at`, Open while bids ratchet the minimum upward,
/// AwaitingSettlement once a quiet period has elapsed after the last bid,
/// and Settled after payout. Bids are escrowed in the configured currency
/// token; each accepted bid fully refunds the one it displaces.
#[contract]
pub struct PactAuction;

#[contractimpl]
impl PactAuction {
    /// Record the immutable auction parameters. Callable once.
    pub fn initialize(
        env: Env,
        parent_registry: Address,
        parent_token_id: u128,
        total_supply: i128,
        currency: Address,
        auction_allowed_at: u64,
        min_auction_complete_wait: u64,
        min_bid_delta_permille: u32,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if total_supply <= 0 || min_bid_delta_permille > 1000 {
            return Err(Error::InvalidInput);
        }

        let config = PactConfig {
            parent_registry: parent_registry.clone(),
            parent_token_id,
            total_supply,
            currency: currency.clone(),
            auction_allowed_at,
            min_auction_complete_wait,
            min_bid_delta_permille,
        };
        storage::set_config(&env, &config);

        storage::set_state(
            &env,
            &AuctionState {
                phase: AuctionPhase::Unopened,
                opened_at: 0,
                closed_at: 0,
                last_bid_at: 0,
                min_bid: STARTING_MIN_BID,
                leading_bidder: None,
                leading_bid: 0,
                beneficiary: None,
            },
        );

        events::publish_initialized(
            &env,
            parent_registry,
            parent_token_id,
            currency,
            auction_allowed_at,
        );

        Ok(())
    }

    /// Open the auction once `auction_allowed_at` has been reached.
    ///
    /// The holder of the parent token at this moment is recorded as the
    /// settlement beneficiary.
    pub fn open_auction(env: Env) -> Result<(), Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotInitialized)?;

        if state.phase != AuctionPhase::Unopened {
            return Err(Error::AlreadyOpened);
        }

        let now = env.ledger().timestamp();
        if now < config.auction_allowed_at {
            return Err(Error::NotYetAllowed);
        }

        let registry = OwnershipRegistryClient::new(&env, &config.parent_registry);
        let holder = registry.owner_of(&config.parent_token_id);

        state.phase = AuctionPhase::Open;
        state.opened_at = now;
        state.beneficiary = Some(holder.clone());
        storage::set_state(&env, &state);

        events::publish_opened(&env, now, holder);

        Ok(())
    }

    /// Place a bid of `amount` on behalf of `bidder`.
    ///
    /// Refunds the displaced leading bid, pulls `amount` into escrow, then
    /// ratchets the minimum for the next bid. A failed currency transfer
    /// traps and leaves the auction state untouched.
    pub fn submit_bid(env: Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotInitialized)?;

        if state.phase != AuctionPhase::Open {
            return Err(Error::AuctionNotOpen);
        }

        if amount < state.min_bid {
            return Err(Error::BidTooLow);
        }

        let displaced = state
            .leading_bidder
            .clone()
            .map(|previous| (previous, state.leading_bid));
        let refunded = state.leading_bid;

        escrow::hold_and_displace(&env, &config.currency, &bidder, amount, displaced);

        state.leading_bidder = Some(bidder.clone());
        state.leading_bid = amount;
        state.min_bid = next_min_bid(amount, config.min_bid_delta_permille);
        state.last_bid_at = env.ledger().timestamp();
        storage::set_state(&env, &state);

        events::publish_bid_placed(&env, bidder, amount, refunded, state.min_bid);

        Ok(())
    }

    /// Close the auction once the quiet period has elapsed since the last
    /// bid. With no bids the period is counted from `opened_at`.
    pub fn close_auction(env: Env) -> Result<(), Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotInitialized)?;

        if state.phase != AuctionPhase::Open {
            return Err(Error::AuctionNotOpen);
        }

        let baseline = if state.leading_bidder.is_some() {
            state.last_bid_at
        } else {
            state.opened_at
        };

        let now = env.ledger().timestamp();
        if now < baseline.saturating_add(config.min_auction_complete_wait) {
            return Err(Error::QuietPeriodNotElapsed);
        }

        state.phase = AuctionPhase::AwaitingSettlement;
        state.closed_at = now;
        storage::set_state(&env, &state);

        events::publish_closed(&env, now, state.leading_bidder.clone(), state.leading_bid);

        Ok(())
    }

    /// Settle a closed auction: pay the escrowed winning bid to the
    /// beneficiary and transfer control of the pact to the winner. With no
    /// bids, control returns to the beneficiary and no currency moves.
    pub fn payout(env: Env) -> Result<(), Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let mut state = storage::get_state(&env).ok_or(Error::NotInitialized)?;

        if state.phase != AuctionPhase::AwaitingSettlement {
            return Err(Error::NotAwaitingSettlement);
        }

        // Set at open, present in every phase past Unopened.
        let beneficiary = state
            .beneficiary
            .clone()
            .ok_or(Error::NotAwaitingSettlement)?;

        let registry = OwnershipRegistryClient::new(&env, &config.parent_registry);

        match state.leading_bidder.clone() {
            Some(winner) => {
                let amount = escrow::release(&env, &config.currency, &beneficiary);
                registry.transfer_control(&config.parent_token_id, &winner);
                events::publish_settled(&env, Some(winner), amount, beneficiary);
            }
            None => {
                registry.transfer_control(&config.parent_token_id, &beneficiary);
                events::publish_settled(&env, None, 0, beneficiary);
            }
        }

        state.phase = AuctionPhase::Settled;
        storage::set_state(&env, &state);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<PactConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    pub fn phase(env: Env) -> Result<AuctionPhase, Error> {
        Ok(Self::state(&env)?.phase)
    }

    pub fn auction_started_at(env: Env) -> Result<u64, Error> {
        Ok(Self::state(&env)?.opened_at)
    }

    pub fn auction_completed_at(env: Env) -> Result<u64, Error> {
        Ok(Self::state(&env)?.closed_at)
    }

    pub fn last_bid_at(env: Env) -> Result<u64, Error> {
        Ok(Self::state(&env)?.last_bid_at)
    }

    pub fn min_bid(env: Env) -> Result<i128, Error> {
        Ok(Self::state(&env)?.min_bid)
    }

    pub fn leading_bidder(env: Env) -> Result<Option<Address>, Error> {
        Ok(Self::state(&env)?.leading_bidder)
    }

    pub fn leading_bid(env: Env) -> Result<i128, Error> {
        Ok(Self::state(&env)?.leading_bid)
    }

    pub fn beneficiary(env: Env) -> Result<Option<Address>, Error> {
        Ok(Self::state(&env)?.beneficiary)
    }
}

impl PactAuction {
    fn state(env: &Env) -> Result<AuctionState, Error> {
        storage::get_state(env).ok_or(Error::NotInitialized)
    }
}

/// Minimum the next bid must reach after an accepted bid of `amount`:
/// truncating permille increment, floored at +1 so the minimum always
/// strictly exceeds the accepted bid.
fn next_min_bid(amount: i128, permille: u32) -> i128 {
    let mut delta = amount * permille as i128 / PERMILLE_DENOMINATOR;
    if delta == 0 {
        delta = 1;
    }
    amount + delta
}

#[cfg(test)]
mod test;
