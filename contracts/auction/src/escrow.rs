//! Escrow ledger of withdrawable balances.
//!
//! Funds displaced from the auction (a superseded bid, the proceeds owed to
//! the seller, the standing bid of a cancelled auction) are credited here and
//! only leave the contract when their owner calls `withdraw`. Nothing is ever
//! pushed to a third party while processing someone else's action.

use soroban_sdk::{Address, Env};

use crate::storage;

/// Add `amount` to the balance of `identity`. A zero credit is a no-op.
pub fn credit(e: &Env, identity: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let balance = storage::get_pending_withdrawal(e, identity);
    storage::set_pending_withdrawal(e, identity, balance + amount);
}

/// Zero the balance of `identity` and return what it held.
///
/// The entry is cleared before the caller attempts any transfer, so a second
/// call in the same or a later invocation yields `0` until a new credit
/// arrives.
pub fn withdraw(e: &Env, identity: &Address) -> i128 {
    let amount = storage::get_pending_withdrawal(e, identity);
    if amount > 0 {
        storage::set_pending_withdrawal(e, identity, 0);
    }
    amount
}

pub fn balance(e: &Env, identity: &Address) -> i128 {
    storage::get_pending_withdrawal(e, identity)
}
