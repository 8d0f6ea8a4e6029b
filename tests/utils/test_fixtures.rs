//! Deployment fixtures: a sale token owned by the issuing address, a payment
//! asset, and either sale controller wired to both.
use super::constants::*;
use capacity_sale::{CapacitySaleConfig, CapacitySaleContract, CapacitySaleContractClient};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, String};
use timed_sale::{TimedSaleConfig, TimedSaleContract, TimedSaleContractClient};

pub struct SaleFixture {
    pub env: Env,
    pub owner: Address,
    pub issuer: Address,
    pub wallet: Address,
    pub token_id: Address,
    pub payment_id: Address,
}

impl SaleFixture {
    /// Fresh environment with the sale token minted to the issuing address.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let issuer = Address::generate(&env);
        let wallet = Address::generate(&env);

        let token_id = env.register(SaleToken, ());
        SaleTokenClient::new(&env, &token_id).initialize(
            &issuer,
            &18,
            &String::from_str(&env, "Bonus Sale Token"),
            &String::from_str(&env, "BST"),
            &SALE_SUPPLY,
        );
        let payment_id = env
            .register_stellar_asset_contract_v2(owner.clone())
            .address();

        SaleFixture {
            env,
            owner,
            issuer,
            wallet,
            token_id,
            payment_id,
        }
    }

    pub fn token(&self) -> SaleTokenClient<'_> {
        SaleTokenClient::new(&self.env, &self.token_id)
    }

    pub fn payment(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.payment_id)
    }

    /// New address holding `BUYER_FUNDS` of the payment asset.
    pub fn funded_buyer(&self) -> Address {
        let buyer = Address::generate(&self.env);
        token::StellarAssetClient::new(&self.env, &self.payment_id).mint(&buyer, &BUYER_FUNDS);
        buyer
    }

    pub fn approve_sale(&self, sale: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 10_000;
        self.token().approve(&self.issuer, sale, &amount, &expiration);
    }

    pub fn at(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn deploy_timed_sale(&self, cap: i128) -> TimedSaleContractClient<'_> {
        let sale = TimedSaleContractClient::new(&self.env, &self.env.register(TimedSaleContract, ()));
        sale.initialize(
            &self.owner,
            &TimedSaleConfig {
                opening_time: OPENING,
                closing_time: CLOSING,
                phase_duration: WEEK,
                rate: RATE,
                cap,
                min_contribution: MIN_CONTRIBUTION,
                collection_wallet: self.wallet.clone(),
                issuing_address: self.issuer.clone(),
                token: self.token_id.clone(),
                payment_token: self.payment_id.clone(),
            },
        );
        sale
    }

    pub fn deploy_capacity_sale(&self) -> CapacitySaleContractClient<'_> {
        let sale = CapacitySaleContractClient::new(
            &self.env,
            &self.env.register(CapacitySaleContract, ()),
        );
        sale.initialize(
            &self.owner,
            &CapacitySaleConfig {
                rate: RATE,
                min_contribution: MIN_CONTRIBUTION,
                collection_wallet: self.wallet.clone(),
                issuing_address: self.issuer.clone(),
                token: self.token_id.clone(),
                payment_token: self.payment_id.clone(),
            },
        );
        sale
    }
}

impl Default for SaleFixture {
    fn default() -> Self {
        Self::new()
    }
}
