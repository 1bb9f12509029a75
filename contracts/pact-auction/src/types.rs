use soroban_sdk::{contracttype, Address};

/// Lifecycle of the auction. Transitions are strictly forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionPhase {
    Unopened = 0,
    Open = 1,
    AwaitingSettlement = 2,
    Settled = 3,
}

/// Immutable parameters, fixed at `initialize` and never changed.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PactConfig {
    /// Contract holding control of the parent token the pact derives from.
    pub parent_registry: Address,
    pub parent_token_id: u128,
    /// Unit count of the tokenized right. Recorded for proportional
    /// accounting by the surrounding system; opaque to the auction itself.
    pub total_supply: i128,
    /// Token contract bids are denominated and escrowed in.
    pub currency: Address,
    /// Earliest timestamp at which the auction may be opened.
    pub auction_allowed_at: u64,
    /// Quiet seconds required after the last bid before closing.
    pub min_auction_complete_wait: u64,
    /// Minimum bid increase in parts per thousand of the previous bid.
    pub min_bid_delta_permille: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionState {
    pub phase: AuctionPhase,
    pub opened_at: u64,
    pub closed_at: u64,
    pub last_bid_at: u64,
    /// Smallest amount the next bid must meet or exceed. Non-decreasing
    /// for the lifetime of an open auction.
    pub min_bid: i128,
    pub leading_bidder: Option<Address>,
    pub leading_bid: i128,
    /// Holder of the parent token at open time, paid out at settlement.
    pub beneficiary: Option<Address>,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Escrow,
}
