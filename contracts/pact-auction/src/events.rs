use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitializedEvent {
    pub parent_registry: Address,
    pub parent_token_id: u128,
    pub currency: Address,
    pub auction_allowed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionOpenedEvent {
    pub opened_at: u64,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub bidder: Address,
    pub amount: i128,
    /// Amount refunded to the displaced leading bidder, 0 for the first bid.
    pub refunded: i128,
    pub next_min_bid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClosedEvent {
    pub closed_at: u64,
    pub leading_bidder: Option<Address>,
    pub leading_bid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEvent {
    pub winner: Option<Address>,
    pub amount: i128,
    pub beneficiary: Address,
}

pub fn publish_initialized(
    env: &Env,
    parent_registry: Address,
    parent_token_id: u128,
    currency: Address,
    auction_allowed_at: u64,
) {
    let event = AuctionInitializedEvent {
        parent_registry,
        parent_token_id,
        currency,
        auction_allowed_at,
    };
    env.events()
        .publish((symbol_short!("pact"), symbol_short!("init")), event);
}

pub fn publish_opened(env: &Env, opened_at: u64, beneficiary: Address) {
    let event = AuctionOpenedEvent {
        opened_at,
        beneficiary,
    };
    env.events()
        .publish((symbol_short!("pact"), symbol_short!("opened")), event);
}

pub fn publish_bid_placed(
    env: &Env,
    bidder: Address,
    amount: i128,
    refunded: i128,
    next_min_bid: i128,
) {
    let event = BidPlacedEvent {
        bidder,
        amount,
        refunded,
        next_min_bid,
    };
    env.events()
        .publish((symbol_short!("pact"), symbol_short!("bid")), event);
}

pub fn publish_closed(env: &Env, closed_at: u64, leading_bidder: Option<Address>, leading_bid: i128) {
    let event = AuctionClosedEvent {
        closed_at,
        leading_bidder,
        leading_bid,
    };
    env.events()
        .publish((symbol_short!("pact"), symbol_short!("closed")), event);
}

pub fn publish_settled(env: &Env, winner: Option<Address>, amount: i128, beneficiary: Address) {
    let event = AuctionSettledEvent {
        winner,
        amount,
        beneficiary,
    };
    env.events()
        .publish((symbol_short!("pact"), symbol_short!("settled")), event);
}
