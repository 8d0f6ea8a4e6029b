use crate::errors::SaleError;
use crate::{events, storage};
use soroban_sdk::{log, Address, Env};

/// Authenticates `caller` and checks that it is the stored sale owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        log!(env, "owner-only call rejected", caller.clone());
        return Err(SaleError::NotAuthorized);
    }
    Ok(())
}

pub fn transfer_ownership(env: &Env, owner: &Address, new_owner: &Address) -> Result<(), SaleError> {
    require_owner(env, owner)?;
    storage::set_owner(env, new_owner);
    events::emit_owner_changed(env, owner.clone(), new_owner.clone());
    Ok(())
}
