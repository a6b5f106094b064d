#![cfg(test)]

use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, Address, Env, String,
};
use voucher_token::{VoucherToken, VoucherTokenClient};

use crate::{Donor, DonorClient, Error};

/// Stand-in project that records the budget raised by the donor.
#[contract]
struct BudgetRecorder;

#[contractimpl]
impl BudgetRecorder {
    pub fn increase_token_budget(env: Env, caller: Address, amount: i128, token: Address) {
        caller.require_auth();
        let key = (symbol_short!("budget"), token);
        let current: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(current + amount));
    }

    pub fn budget(env: Env, token: Address) -> i128 {
        env.storage()
            .instance()
            .get(&(symbol_short!("budget"), token))
            .unwrap_or(0)
    }
}

struct Setup {
    env: Env,
    donor: DonorClient<'static>,
    token: VoucherTokenClient<'static>,
    admin: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let donor = DonorClient::new(&env, &env.register(Donor, ()));
    let admin = Address::generate(&env);
    donor.init(&admin);

    let token = VoucherTokenClient::new(&env, &env.register(VoucherToken, ()));
    let name = String::from_str(&env, "RahatToken");
    token.init(&donor.address, &name, &String::from_str(&env, "RAHAT"), &18, &name);

    Setup {
        env,
        donor,
        token,
        admin,
    }
}

fn register_recorder(env: &Env) -> BudgetRecorderClient<'static> {
    BudgetRecorderClient::new(env, &env.register(BudgetRecorder, ()))
}

#[test]
fn test_init_sets_owner() {
    let s = setup();
    assert_eq!(s.donor.owner(), Some(s.admin.clone()));
    assert_eq!(s.donor.try_init(&s.admin), Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_mint_token_to_donor() {
    let s = setup();
    s.donor.mint_token(&s.admin, &s.token.address, &100);
    assert_eq!(s.token.balance(&s.donor.address), 100);
    assert_eq!(s.token.total_supply(), 100);
}

#[test]
fn test_mint_and_approve_funds_project() {
    let s = setup();
    let project = register_recorder(&s.env);
    s.donor.register_project(&s.admin, &project.address, &true);

    s.donor
        .mint_token_and_approve(&s.admin, &s.token.address, &project.address, &50, &None);

    assert_eq!(s.token.balance(&project.address), 50);
    assert_eq!(s.token.allowance(&s.donor.address, &project.address), 50);
    assert_eq!(project.budget(&s.token.address), 50);
    assert_eq!(s.donor.mint_count(), 0);
}

#[test]
fn test_mint_and_approve_with_description() {
    let s = setup();
    let project = register_recorder(&s.env);
    s.donor.register_project(&s.admin, &project.address, &true);
    let description = String::from_str(&s.env, "Minting tokens for a new project");

    s.donor.mint_token_and_approve(
        &s.admin,
        &s.token.address,
        &project.address,
        &30,
        &Some(description.clone()),
    );

    assert_eq!(s.token.balance(&project.address), 30);
    let record = s.donor.mint_record(&1).unwrap();
    assert_eq!(record.amount, 30);
    assert_eq!(record.project, project.address);
    assert_eq!(record.description, description);
}

#[test]
fn test_unregistered_project_rejected() {
    let s = setup();
    let project = register_recorder(&s.env);
    assert_eq!(
        s.donor
            .try_mint_token_and_approve(&s.admin, &s.token.address, &project.address, &10, &None),
        Err(Ok(Error::ProjectNotApproved))
    );

    s.donor.register_project(&s.admin, &project.address, &true);
    s.donor.register_project(&s.admin, &project.address, &false);
    assert!(!s.donor.is_project_approved(&project.address));
}

#[test]
fn test_non_owner_rejected() {
    let s = setup();
    let outsider = Address::generate(&s.env);
    assert_eq!(
        s.donor.try_register_project(&outsider, &outsider, &true),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(
        s.donor.try_mint_token(&outsider, &s.token.address, &1),
        Err(Ok(Error::NotOwner))
    );
}

#[test]
fn test_add_token_owner() {
    let s = setup();
    let new_owner = Address::generate(&s.env);
    s.donor.add_token_owner(&s.admin, &s.token.address, &new_owner);
    assert!(s.token.is_owner(&new_owner));
}
