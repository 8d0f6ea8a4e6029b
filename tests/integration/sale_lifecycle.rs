//! Private sale followed by the timed sale, both issuing from one address.
use crate::assert_sale_error;
use crate::utils::constants::*;
use crate::utils::SaleFixture;
use sale_core::SaleError;

#[test]
fn test_private_then_timed_sale() {
    let fixture = SaleFixture::new();
    let private = fixture.deploy_capacity_sale();
    let presale = fixture.deploy_timed_sale(100 * ETHER);
    fixture.approve_sale(&private.address, SALE_SUPPLY / 2);
    fixture.approve_sale(&presale.address, SALE_SUPPLY / 2);

    let early = fixture.funded_buyer();
    let late = fixture.funded_buyer();
    private.add_to_whitelist(&fixture.owner, &early, &(20 * ETHER));
    presale.add_to_whitelist(&fixture.owner, &late);

    fixture.at(OPENING - WEEK);
    private.contribute(&early, &(20 * ETHER));
    private.close_sale(&fixture.owner);

    // Private whitelist does not carry over.
    fixture.at(OPENING);
    assert_sale_error!(
        presale.try_contribute(&early, &ETHER),
        SaleError::NotWhitelisted
    );
    presale.contribute(&late, &(10 * ETHER));

    fixture.at(CLOSING);
    presale.finalize(&fixture.owner);
    private.claim_bonus_tokens(&early);
    presale.claim_bonus_tokens(&late);
    private.unlock_secondary_tokens(&fixture.owner);
    private.claim_locked_bonus_tokens(&early);
    assert_sale_error!(
        presale.try_claim_locked_bonus_tokens(&late),
        SaleError::GateNotOpen
    );

    let token = fixture.token();
    assert_eq!(token.balance(&early), 20 * ETHER * RATE * 14 / 10);
    assert_eq!(token.balance(&late), 10 * ETHER * RATE * 11 / 10);
    assert_eq!(fixture.payment().balance(&fixture.wallet), 30 * ETHER);
    assert_eq!(
        token.balance(&fixture.issuer),
        SALE_SUPPLY - token.balance(&early) - token.balance(&late)
    );
    assert_eq!(presale.get_bonus_vault_balance(), 10 * ETHER * RATE / 10);
}

#[test]
fn test_issuer_allowance_bounds_issuance() {
    let fixture = SaleFixture::new();
    let sale = fixture.deploy_timed_sale(SALE_SUPPLY);
    let buyer = fixture.funded_buyer();
    sale.add_to_whitelist(&fixture.owner, &buyer);
    fixture.approve_sale(&sale.address, ETHER * RATE);
    fixture.at(OPENING);

    sale.contribute(&buyer, &ETHER);
    assert_eq!(fixture.token().allowance(&fixture.issuer, &sale.address), 0);
    assert_sale_error!(
        sale.try_contribute(&buyer, &ETHER),
        SaleError::InsufficientLedgerAllowance
    );

    // Bonus claims draw on the same allowance.
    fixture.at(CLOSING);
    sale.finalize(&fixture.owner);
    assert_sale_error!(
        sale.try_claim_bonus_tokens(&buyer),
        SaleError::InsufficientLedgerAllowance
    );
    fixture.approve_sale(&sale.address, ETHER * RATE);
    sale.claim_bonus_tokens(&buyer);
    assert_eq!(fixture.token().balance(&buyer), ETHER * RATE * 11 / 10);
}
