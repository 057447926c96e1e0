#![no_std]

//! # Escrowed Auction Contract
//!
//! A single-item ascending auction with an instant-buy price, held by one
//! contract instance. Bids are paid into the contract in the auction token.
//! Whenever funds are displaced (a bid is outbid, the auction ends, the
//! auction is cancelled) they are credited to an escrow ledger and stay
//! there until their owner pulls them out with [`AuctionContract::withdraw`].
//!
//! ## Modules
//!
//! - `auction` — state machine over [`Auction`], driven by an explicit `now`.
//! - `escrow`  — withdrawable balances per participant.
//! - `events`  — notifications published on every transition.
//! - `storage` — instance and persistent storage accessors with TTL upkeep.

mod auction;
mod errors;
mod escrow;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

pub use crate::errors::Error;
pub use crate::events::{
    AuctionCancelled, AuctionCreated, AuctionEnded, HighestBidIncreased, Withdrawal,
};
pub use crate::types::{Auction, AuctionPhase, BidOutcome, ItemCondition};

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Create the auction held by this contract instance.
    ///
    /// # Arguments
    /// * `owner` - Seller; the only address allowed to end or cancel
    /// * `token` - Asset bids are paid in
    /// * `duration_seconds` - Bidding window counted from the current ledger time
    /// * `start_price` - Minimum first bid
    /// * `buy_price` - Bid amount that closes the auction immediately
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - An auction already exists
    /// * `Error::InvalidConfiguration` - Unless `buy_price > start_price > 0`
    ///   and `duration_seconds > 0`
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: &Env,
        owner: Address,
        token: Address,
        item_name: String,
        condition: ItemCondition,
        duration_seconds: u64,
        start_price: i128,
        buy_price: i128,
    ) -> Result<(), Error> {
        owner.require_auth();

        if storage::has_auction(e) {
            return Err(Error::AlreadyInitialized);
        }

        let auction = Auction::new(
            owner.clone(),
            token,
            item_name.clone(),
            condition,
            duration_seconds,
            start_price,
            buy_price,
            e.ledger().timestamp(),
        )?;
        storage::save_auction(e, &auction);

        AuctionCreated {
            owner,
            item_name,
            end_time: auction.end_time,
        }
        .publish(e);

        Ok(())
    }

    /// Place a bid of `amount`, paid into the contract from `bidder`.
    ///
    /// Returns `BidOutcome::BoughtOut` when the bid reaches the buy price and
    /// ends the auction.
    ///
    /// # Errors
    /// * `Error::AuctionClosed` - Auction is over or past its end time
    /// * `Error::SellerCannotBid` - `bidder` is the owner
    /// * `Error::BidTooLow` - Bid does not beat the standing bid or start price
    pub fn place_bid(e: &Env, bidder: Address, amount: i128) -> Result<BidOutcome, Error> {
        bidder.require_auth();
        submit_bid(e, &bidder, amount)
    }

    /// Bid exactly the buy price.
    pub fn buy_now(e: &Env, buyer: Address) -> Result<BidOutcome, Error> {
        buyer.require_auth();
        let buy_price = load_auction(e)?.buy_price;
        submit_bid(e, &buyer, buy_price)
    }

    /// End the auction after its end time. The winning bid is credited to
    /// the owner's escrow balance.
    ///
    /// # Errors
    /// * `Error::AuctionAlreadyClosed` - Already ended or cancelled
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::AuctionNotYetExpired` - End time not reached
    pub fn end_auction(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut auction = load_auction(e)?;
        auction.end(e, &caller, e.ledger().timestamp())?;
        storage::save_auction(e, &auction);

        AuctionEnded {
            winner: auction.winner,
            winning_amount: auction.winning_amount,
        }
        .publish(e);
        Ok(())
    }

    /// Cancel the auction. The standing bid, if any, becomes withdrawable by
    /// its bidder.
    ///
    /// # Errors
    /// * `Error::AuctionAlreadyClosed` - Already ended or cancelled
    /// * `Error::Unauthorized` - `caller` is not the owner
    pub fn cancel_auction(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut auction = load_auction(e)?;
        auction.cancel(e, &caller, e.ledger().timestamp())?;
        storage::save_auction(e, &auction);

        AuctionCancelled {
            owner: auction.owner,
        }
        .publish(e);
        Ok(())
    }

    /// Pay out the caller's escrow balance and return the amount paid.
    ///
    /// The balance is zeroed before the token transfer. If the transfer
    /// traps, the whole invocation is rolled back and the balance stays
    /// claimable. A zero balance yields `0` and still emits `Withdrawal`.
    pub fn withdraw(e: &Env, identity: Address) -> Result<i128, Error> {
        identity.require_auth();
        let auction = load_auction(e)?;

        let amount = escrow::withdraw(e, &identity);
        if amount > 0 {
            let token_client = token::Client::new(e, &auction.token);
            token_client.transfer(&e.current_contract_address(), &identity, &amount);
            log!(e, "withdrew {} from escrow", amount);
        }

        Withdrawal { identity, amount }.publish(e);
        Ok(amount)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(e: &Env) -> Result<Auction, Error> {
        load_auction(e)
    }

    pub fn owner(e: &Env) -> Result<Address, Error> {
        Ok(load_auction(e)?.owner)
    }

    pub fn item_name(e: &Env) -> Result<String, Error> {
        Ok(load_auction(e)?.item_name)
    }

    pub fn condition(e: &Env) -> Result<ItemCondition, Error> {
        Ok(load_auction(e)?.condition)
    }

    pub fn bid_token(e: &Env) -> Result<Address, Error> {
        Ok(load_auction(e)?.token)
    }

    pub fn start_price(e: &Env) -> Result<i128, Error> {
        Ok(load_auction(e)?.start_price)
    }

    pub fn buy_price(e: &Env) -> Result<i128, Error> {
        Ok(load_auction(e)?.buy_price)
    }

    pub fn start_time(e: &Env) -> Result<u64, Error> {
        Ok(load_auction(e)?.start_time)
    }

    pub fn end_time(e: &Env) -> Result<u64, Error> {
        Ok(load_auction(e)?.end_time)
    }

    /// Seconds of bidding left at the current ledger time, `0` once closed.
    pub fn time_remaining(e: &Env) -> Result<u64, Error> {
        Ok(load_auction(e)?.time_remaining(e.ledger().timestamp()))
    }

    pub fn highest_bidder(e: &Env) -> Result<Option<Address>, Error> {
        Ok(load_auction(e)?.highest_bidder)
    }

    pub fn highest_bid(e: &Env) -> Result<i128, Error> {
        Ok(load_auction(e)?.highest_bid)
    }

    pub fn bid_count(e: &Env) -> Result<u32, Error> {
        Ok(load_auction(e)?.bid_count)
    }

    pub fn phase(e: &Env) -> Result<AuctionPhase, Error> {
        Ok(load_auction(e)?.phase)
    }

    pub fn winner(e: &Env) -> Result<Option<Address>, Error> {
        Ok(load_auction(e)?.winner)
    }

    pub fn winning_amount(e: &Env) -> Result<i128, Error> {
        Ok(load_auction(e)?.winning_amount)
    }

    /// Escrow balance `identity` can currently withdraw.
    pub fn pending_withdrawal(e: &Env, identity: Address) -> Result<i128, Error> {
        load_auction(e)?;
        Ok(escrow::balance(e, &identity))
    }
}

fn load_auction(e: &Env) -> Result<Auction, Error> {
    storage::get_auction(e).ok_or(Error::NotInitialized)
}

// Validate and apply the bid, then take custody of the funds. A failed
// transfer traps and discards the state change with it.
//
// On a buy-out `AuctionEnded` goes out before `HighestBidIncreased`.
fn submit_bid(e: &Env, bidder: &Address, amount: i128) -> Result<BidOutcome, Error> {
    let mut auction = load_auction(e)?;
    let outcome = auction.place_bid(e, bidder, amount, e.ledger().timestamp())?;

    let token_client = token::Client::new(e, &auction.token);
    token_client.transfer(bidder, &e.current_contract_address(), &amount);

    storage::save_auction(e, &auction);

    if outcome == BidOutcome::BoughtOut {
        AuctionEnded {
            winner: auction.winner,
            winning_amount: auction.winning_amount,
        }
        .publish(e);
    }
    HighestBidIncreased {
        bidder: bidder.clone(),
        amount,
    }
    .publish(e);

    Ok(outcome)
}
