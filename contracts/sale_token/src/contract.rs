use crate::errors::TokenError;
use crate::events;
use crate::storage::{self, TokenMetadata};
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Pausable sale token with a transfer whitelist"
);

#[contract]
pub struct SaleToken;

/// Entry points fixed by the token interface cannot return errors, so their
/// failures surface as contract error panics.
fn or_panic<T>(env: &Env, result: Result<T, TokenError>) -> T {
    result.unwrap_or_else(|error| panic_with_error!(env, error))
}

fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// While paused only whitelisted addresses may act on balances.
fn ensure_can_act(env: &Env, actor: &Address) -> Result<(), TokenError> {
    if storage::is_paused(env) && !storage::is_whitelisted(env, actor) {
        log!(env, "token paused for", actor.clone());
        return Err(TokenError::TransfersPaused);
    }
    Ok(())
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        return Err(TokenError::NotAuthorized);
    }
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    storage::spend_balance(env, from, amount)?;
    storage::receive_balance(env, to, amount)?;
    events::transfer(env, from.clone(), to.clone(), amount);
    Ok(())
}

fn burn_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    storage::spend_balance(env, from, amount)?;
    storage::set_total_supply(env, storage::get_total_supply(env) - amount);
    events::burn(env, from.clone(), amount);
    Ok(())
}

#[contractimpl]
impl SaleToken {
    /// Initialize the token and credit `initial_supply` to the admin.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        initial_supply: i128,
    ) -> Result<(), TokenError> {
        if storage::has_admin(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        check_nonnegative_amount(initial_supply)?;

        storage::set_admin(&env, &admin);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        storage::set_total_supply(&env, initial_supply);
        storage::write_balance(&env, &admin, initial_supply);

        events::mint(&env, admin.clone(), admin, initial_supply);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        storage::get_admin(&env)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        require_admin(&env, &caller)?;
        storage::set_paused(&env, true);
        events::paused(&env, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        require_admin(&env, &caller)?;
        storage::set_paused(&env, false);
        events::paused(&env, false);
        Ok(())
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn add_to_whitelist(env: Env, caller: Address, account: Address) -> Result<(), TokenError> {
        require_admin(&env, &caller)?;
        storage::set_whitelisted(&env, &account, true);
        events::whitelisted(&env, account, true);
        Ok(())
    }

    pub fn add_many_to_whitelist(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), TokenError> {
        require_admin(&env, &caller)?;
        for account in accounts.iter() {
            storage::set_whitelisted(&env, &account, true);
            events::whitelisted(&env, account, true);
        }
        Ok(())
    }

    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), TokenError> {
        require_admin(&env, &caller)?;
        storage::set_whitelisted(&env, &account, false);
        events::whitelisted(&env, account, false);
        Ok(())
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }
}

#[contractimpl]
impl TokenInterface for SaleToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        or_panic(&env, check_nonnegative_amount(amount));
        or_panic(&env, ensure_can_act(&env, &from));

        or_panic(
            &env,
            storage::write_allowance(&env, &from, &spender, amount, expiration_ledger),
        );
        events::approve(&env, from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        or_panic(&env, check_nonnegative_amount(amount));
        or_panic(&env, ensure_can_act(&env, &from));
        or_panic(&env, move_balance(&env, &from, &to, amount));
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        or_panic(&env, check_nonnegative_amount(amount));
        or_panic(&env, ensure_can_act(&env, &spender));

        or_panic(&env, storage::spend_allowance(&env, &from, &spender, amount));
        or_panic(&env, move_balance(&env, &from, &to, amount));
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        or_panic(&env, check_nonnegative_amount(amount));
        or_panic(&env, ensure_can_act(&env, &from));
        or_panic(&env, burn_balance(&env, &from, amount));
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        or_panic(&env, check_nonnegative_amount(amount));
        or_panic(&env, ensure_can_act(&env, &spender));

        or_panic(&env, storage::spend_allowance(&env, &from, &spender, amount));
        or_panic(&env, burn_balance(&env, &from, amount));
    }

    fn decimals(env: Env) -> u32 {
        or_panic(&env, storage::get_metadata(&env)).decimal
    }

    fn name(env: Env) -> String {
        or_panic(&env, storage::get_metadata(&env)).name
    }

    fn symbol(env: Env) -> String {
        or_panic(&env, storage::get_metadata(&env)).symbol
    }
}
