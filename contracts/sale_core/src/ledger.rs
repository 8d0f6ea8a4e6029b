use crate::errors::SaleError;
use crate::types::SaleTerms;
use soroban_sdk::{log, token, Address, Env};

/// Token supply held by the issuing address and released to the sale through
/// a ledger allowance.
///
/// The token is whatever contract implements the Soroban token interface at
/// the configured address, so a Stellar asset contract, the whitelisted
/// `sale_token` ledger or a test double can all back a sale.
pub struct IssuingLedger<'a> {
    env: &'a Env,
    token: token::Client<'a>,
    issuer: Address,
}

impl<'a> IssuingLedger<'a> {
    pub fn new(env: &'a Env, terms: &SaleTerms) -> Self {
        IssuingLedger {
            env,
            token: token::Client::new(env, &terms.token),
            issuer: terms.issuing_address.clone(),
        }
    }

    /// Allowance the issuing address currently grants to this sale.
    pub fn available(&self) -> i128 {
        self.token
            .allowance(&self.issuer, &self.env.current_contract_address())
    }

    pub fn ensure_allowance(&self, amount: i128) -> Result<(), SaleError> {
        let available = self.available();
        if available < amount {
            log!(self.env, "issuer allowance too low", available, amount);
            return Err(SaleError::InsufficientLedgerAllowance);
        }
        Ok(())
    }

    /// Moves `amount` from the issuing address to `to` on behalf of the sale.
    pub fn pull(&self, to: &Address, amount: i128) -> Result<(), SaleError> {
        self.ensure_allowance(amount)?;
        if amount == 0 {
            return Ok(());
        }
        self.token.transfer_from(
            &self.env.current_contract_address(),
            &self.issuer,
            to,
            &amount,
        );
        Ok(())
    }
}

/// Sends contributed value straight from the payer to the collection wallet.
pub fn forward_payment(env: &Env, terms: &SaleTerms, payer: &Address, amount: i128) {
    let payment = token::Client::new(env, &terms.payment_token);
    payment.transfer(payer, &terms.collection_wallet, &amount);
}
