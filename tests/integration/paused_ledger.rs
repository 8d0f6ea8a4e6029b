//! The sale token can be paused while a sale runs; the sale contract only
//! keeps issuing if the token whitelists it as a spender.
use crate::utils::constants::*;
use crate::utils::SaleFixture;
use crate::{assert_balance, assert_call_fails};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_paused_token_blocks_sale_not_whitelisted() {
    let fixture = SaleFixture::new();
    let sale = fixture.deploy_timed_sale(SALE_SUPPLY);
    fixture.approve_sale(&sale.address, SALE_SUPPLY);
    let buyer = fixture.funded_buyer();
    sale.add_to_whitelist(&fixture.owner, &buyer);

    fixture.token().pause(&fixture.issuer);
    fixture.at(OPENING);

    assert_call_fails!(sale.try_contribute(&buyer, &ETHER));
    assert_eq!(sale.wei_raised(), 0);
    assert_balance!(fixture.payment(), &buyer, BUYER_FUNDS);
    assert_balance!(fixture.token(), &buyer, 0);
}

#[test]
fn test_paused_token_allows_whitelisted_sale() {
    let fixture = SaleFixture::new();
    let sale = fixture.deploy_timed_sale(SALE_SUPPLY);
    fixture.approve_sale(&sale.address, SALE_SUPPLY);
    let buyer = fixture.funded_buyer();
    sale.add_to_whitelist(&fixture.owner, &buyer);

    fixture.token().pause(&fixture.issuer);
    fixture.token().add_to_whitelist(&fixture.issuer, &sale.address);
    fixture.at(OPENING);

    sale.contribute(&buyer, &ETHER);
    assert_balance!(fixture.token(), &buyer, ETHER * RATE);
    assert_balance!(fixture.payment(), &fixture.wallet, ETHER);

    // Buyers still cannot move their tokens while paused.
    let friend = Address::generate(&fixture.env);
    assert_call_fails!(fixture.token().try_transfer(&buyer, &friend, &1));
}

#[test]
fn test_bonus_claims_follow_token_pause() {
    let fixture = SaleFixture::new();
    let sale = fixture.deploy_capacity_sale();
    fixture.approve_sale(&sale.address, SALE_SUPPLY);
    let buyer = fixture.funded_buyer();
    sale.add_to_whitelist(&fixture.owner, &buyer, &(10 * ETHER));

    sale.contribute(&buyer, &ETHER);
    sale.close_sale(&fixture.owner);

    fixture.token().pause(&fixture.issuer);
    assert_call_fails!(sale.try_claim_bonus_tokens(&buyer));
    assert!(!sale.get_vault_entry(&buyer).immediate_claimed);

    fixture.token().unpause(&fixture.issuer);
    sale.claim_bonus_tokens(&buyer);
    assert_balance!(fixture.token(), &buyer, ETHER * RATE * 12 / 10);
}
