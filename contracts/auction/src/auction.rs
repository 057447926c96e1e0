//! Auction state machine.
//!
//! Every transition takes the current time as an explicit `now` argument;
//! only the contract entrypoints read the ledger clock. A method either
//! returns `Err` before touching anything, or applies its whole effect
//! (field updates and escrow credits for displaced funds) and reports what
//! happened so the caller can publish the matching notifications.

use soroban_sdk::{log, Address, Env, String};

use crate::errors::Error;
use crate::escrow;
use crate::types::{Auction, AuctionPhase, BidOutcome, ItemCondition};

impl Auction {
    /// Build a fresh `Active` auction closing `duration_seconds` after `now`.
    ///
    /// # Errors
    /// * `Error::InvalidConfiguration` - unless `buy_price > start_price > 0`
    ///   and the duration is non-zero and fits the clock
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: Address,
        token: Address,
        item_name: String,
        condition: ItemCondition,
        duration_seconds: u64,
        start_price: i128,
        buy_price: i128,
        now: u64,
    ) -> Result<Auction, Error> {
        if start_price <= 0 || buy_price <= start_price || duration_seconds == 0 {
            return Err(Error::InvalidConfiguration);
        }
        let end_time = now
            .checked_add(duration_seconds)
            .ok_or(Error::InvalidConfiguration)?;

        Ok(Auction {
            owner,
            item_name,
            condition,
            token,
            start_price,
            buy_price,
            start_time: now,
            end_time,
            highest_bidder: None,
            highest_bid: 0,
            bid_count: 0,
            phase: AuctionPhase::Active,
            winner: None,
            winning_amount: 0,
        })
    }

    /// Accepts bids only while active and before `end_time`.
    pub fn is_open(&self, now: u64) -> bool {
        self.phase == AuctionPhase::Active && now < self.end_time
    }

    pub fn time_remaining(&self, now: u64) -> u64 {
        if self.is_open(now) {
            self.end_time - now
        } else {
            0
        }
    }

    /// Apply a bid of `amount` from `bidder`.
    ///
    /// The superseded high bidder, if any, is credited in escrow with their
    /// bid. A bid at or above the buy price closes the auction on the spot
    /// and yields `BidOutcome::BoughtOut`.
    ///
    /// # Errors
    /// * `Error::AuctionClosed` - the auction is terminal or `now >= end_time`
    /// * `Error::SellerCannotBid` - `bidder` is the owner
    /// * `Error::BidTooLow` - `amount` does not beat the standing bid, or the
    ///   first bid is under the start price
    pub fn place_bid(
        &mut self,
        e: &Env,
        bidder: &Address,
        amount: i128,
        now: u64,
    ) -> Result<BidOutcome, Error> {
        if !self.is_open(now) {
            log!(e, "bid rejected: auction closed at {}", self.end_time);
            return Err(Error::AuctionClosed);
        }
        if *bidder == self.owner {
            return Err(Error::SellerCannotBid);
        }
        if amount <= self.highest_bid || amount < self.start_price {
            log!(
                e,
                "bid rejected: {} does not beat {}",
                amount,
                self.highest_bid
            );
            return Err(Error::BidTooLow);
        }

        if let Some(previous) = self.highest_bidder.take() {
            escrow::credit(e, &previous, self.highest_bid);
        }
        self.highest_bidder = Some(bidder.clone());
        self.highest_bid = amount;
        self.bid_count += 1;

        if amount >= self.buy_price {
            self.close(e);
            return Ok(BidOutcome::BoughtOut);
        }
        Ok(BidOutcome::Accepted)
    }

    /// Close an expired auction on behalf of its owner.
    ///
    /// # Errors
    /// * `Error::AuctionAlreadyClosed` - already ended or cancelled
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::AuctionNotYetExpired` - `now < end_time`
    pub fn end(&mut self, e: &Env, caller: &Address, now: u64) -> Result<(), Error> {
        if self.phase.is_terminal() {
            return Err(Error::AuctionAlreadyClosed);
        }
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        if now < self.end_time {
            return Err(Error::AuctionNotYetExpired);
        }

        self.close(e);
        Ok(())
    }

    /// Cancel the auction, returning the standing bid to its bidder through
    /// escrow. Allowed at any time while active.
    ///
    /// # Errors
    /// * `Error::AuctionAlreadyClosed` - already ended or cancelled
    /// * `Error::Unauthorized` - `caller` is not the owner
    pub fn cancel(&mut self, e: &Env, caller: &Address, now: u64) -> Result<(), Error> {
        if self.phase.is_terminal() {
            return Err(Error::AuctionAlreadyClosed);
        }
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }

        self.phase = AuctionPhase::Cancelled;
        if let Some(bidder) = &self.highest_bidder {
            escrow::credit(e, bidder, self.highest_bid);
        }
        log!(e, "auction cancelled at {}", now);
        Ok(())
    }

    // End sequence shared by expiry and buy-out.
    fn close(&mut self, e: &Env) {
        self.phase = AuctionPhase::Ended;
        if self.bid_count > 0 {
            self.winner = self.highest_bidder.clone();
            self.winning_amount = self.highest_bid;
            escrow::credit(e, &self.owner, self.highest_bid);
        }
        log!(e, "auction ended with {} bids", self.bid_count);
    }
}
