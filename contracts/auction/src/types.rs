use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the auction contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The single auction held by this instance
    Auction,
    /// Withdrawable escrow balance by participant
    PendingWithdrawal(Address),
}

/// Condition of the item up for auction
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ItemCondition {
    New = 0,
    LikeNew = 1,
    VeryGood = 2,
    Good = 3,
    Acceptable = 4,
}

/// Lifecycle phase. `Ended` and `Cancelled` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionPhase {
    Active = 0,
    Ended = 1,
    Cancelled = 2,
}

impl AuctionPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AuctionPhase::Active)
    }
}

/// Result of an accepted bid.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BidOutcome {
    /// The bid is the new standing high bid
    Accepted,
    /// The bid reached the buy price and closed the auction
    BoughtOut,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Seller address
    pub owner: Address,
    pub item_name: String,
    pub condition: ItemCondition,
    /// Asset that bids are paid in and withdrawals are paid out of
    pub token: Address,
    /// Minimum amount of the first bid
    pub start_price: i128,
    /// A bid at or above this amount ends the auction immediately
    pub buy_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub bid_count: u32,
    pub phase: AuctionPhase,
    pub winner: Option<Address>,
    pub winning_amount: i128,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
