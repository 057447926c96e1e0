
use crate::{AuctionContract, AuctionContractClient, ItemCondition};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, Event, String, Val, Vec,
};

pub const START_TIME: u64 = 1_000;
pub const DURATION: u64 = 14_400;
pub const START_PRICE: i128 = 1;
pub const BUY_PRICE: i128 = 50;
pub const FUNDING: i128 = 1_000;

pub struct TestAuction {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub owner: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl TestAuction {
    /// New funded participant
    pub fn bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        self.token_admin.mint(&bidder, &FUNDING);
        bidder
    }

    pub fn escrow_held(&self) -> i128 {
        self.token.balance(&self.client.address)
    }

    /// The last `count` events this auction published, oldest first.
    /// Token contract events are skipped.
    pub fn last_events(&self, count: u32) -> Vec<(Address, Vec<Val>, Val)> {
        let mut ours = vec![&self.env];
        for event in self.env.events().all().iter() {
            if event.0 == self.client.address {
                ours.push_back(event);
            }
        }
        assert!(
            ours.len() >= count,
            "auction published {} events",
            ours.len()
        );
        ours.slice(ours.len() - count..)
    }

    /// `event` as it appears in the event log when this auction publishes it
    pub fn published(&self, event: &impl Event) -> (Address, Vec<Val>, Val) {
        (
            self.client.address.clone(),
            event.topics(&self.env),
            event.data(&self.env),
        )
    }
}

/// Deploys an uninitialized auction contract next to a stellar asset
pub fn setup_uninitialized() -> TestAuction {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    token_admin.mint(&owner, &FUNDING);

    TestAuction {
        env,
        client,
        owner,
        token,
        token_admin,
    }
}

/// Lamborghini auction: start price 1, buy price 50, four hours to run
pub fn setup_test() -> TestAuction {
    let t = setup_uninitialized();
    t.client.initialize(
        &t.owner,
        &t.token.address,
        &String::from_str(&t.env, "Lamborghini Aventador"),
        &ItemCondition::LikeNew,
        &DURATION,
        &START_PRICE,
        &BUY_PRICE,
    );
    t
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
