use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub owner: Address,
    pub item_name: String,
    pub end_time: u64,
}

/// Event emitted when a bid becomes the standing high bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBidIncreased {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when the auction ends, by expiry or buy-out.
/// `winner` is `None` when no bid was ever accepted.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    pub winner: Option<Address>,
    pub winning_amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelled {
    #[topic]
    pub owner: Address,
}

/// Event emitted on every withdrawal, including zero-amount ones
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    #[topic]
    pub identity: Address,
    pub amount: i128,
}
