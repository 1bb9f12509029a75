use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    /// `open_auction` called before `auction_allowed_at`.
    NotYetAllowed = 4,
    AlreadyOpened = 5,
    AuctionNotOpen = 6,
    BidTooLow = 7,
    /// `close_auction` called before the quiet period elapsed.
    QuietPeriodNotElapsed = 8,
    NotAwaitingSettlement = 9,
}
