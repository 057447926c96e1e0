use soroban_sdk::contracterror;

/// Error codes for the escrowed auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Prices or duration rejected at creation
    InvalidConfiguration = 3,
    /// Bid placed on a terminal or expired auction
    AuctionClosed = 4,
    /// Owner tried to bid on their own item
    SellerCannotBid = 5,
    /// Bid does not beat the standing bid or the start price
    BidTooLow = 6,
    /// Manual end requested before the end time
    AuctionNotYetExpired = 7,
    /// End or cancel requested on an ended or cancelled auction
    AuctionAlreadyClosed = 8,
    /// Caller is not the auction owner
    Unauthorized = 9,
}
