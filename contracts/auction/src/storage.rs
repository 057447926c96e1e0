use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn has_auction(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Auction)
}

pub fn get_auction(e: &Env) -> Option<Auction> {
    let auction = e.storage().instance().get::<_, Auction>(&DataKey::Auction);
    if auction.is_some() {
        extend_instance_ttl(e);
    }
    auction
}

pub fn save_auction(e: &Env, auction: &Auction) {
    e.storage().instance().set(&DataKey::Auction, auction);
    extend_instance_ttl(e);
}

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// ESCROW STORAGE
// ============================================================================

/// Withdrawable balance for `identity`, zero if never credited
pub fn get_pending_withdrawal(e: &Env, identity: &Address) -> i128 {
    let key = DataKey::PendingWithdrawal(identity.clone());
    let balance = e.storage().persistent().get::<_, i128>(&key);
    if balance.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance.unwrap_or(0)
}

pub fn set_pending_withdrawal(e: &Env, identity: &Address, amount: i128) {
    let key = DataKey::PendingWithdrawal(identity.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
