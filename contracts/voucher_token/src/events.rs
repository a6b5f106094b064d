use soroban_sdk::{symbol_short, Address, Env, String};

pub fn emit_mint(env: &Env, minter: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("mint"), minter, to);
    env.events().publish(topics, amount);
}

pub fn emit_burn(env: &Env, from: Address, amount: i128) {
    let topics = (symbol_short!("burn"), from);
    env.events().publish(topics, amount);
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from, to);
    env.events().publish(topics, amount);
}

pub fn emit_approve(env: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    let topics = (symbol_short!("approve"), from, spender);
    env.events().publish(topics, (amount, expiration_ledger));
}

pub fn emit_owner_added(env: &Env, owner: Address, by: Address) {
    let topics = (symbol_short!("owner_add"), owner);
    env.events().publish(topics, by);
}

pub fn emit_description_updated(env: &Env, description: String) {
    env.events().publish((symbol_short!("desc_upd"),), description);
}
