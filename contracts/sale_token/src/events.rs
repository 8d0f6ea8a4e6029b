use soroban_sdk::{symbol_short, Address, Env};

pub fn approve(env: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    let topics = (symbol_short!("approve"), from, spender);
    env.events().publish(topics, (amount, expiration_ledger));
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from, to);
    env.events().publish(topics, amount);
}

pub fn burn(env: &Env, from: Address, amount: i128) {
    let topics = (symbol_short!("burn"), from);
    env.events().publish(topics, amount);
}

pub fn mint(env: &Env, admin: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("mint"), admin, to);
    env.events().publish(topics, amount);
}

pub fn paused(env: &Env, paused: bool) {
    let topics = (symbol_short!("paused"),);
    env.events().publish(topics, paused);
}

pub fn whitelisted(env: &Env, account: Address, whitelisted: bool) {
    let topics = (symbol_short!("whitelist"), account);
    env.events().publish(topics, whitelisted);
}
