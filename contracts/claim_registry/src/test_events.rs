extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Bytes, BytesN, Env, IntoVal, TryIntoVal,
};

use crate::events::{ClaimCreated, ClaimProcessed, OtpAdded};
use crate::{ClaimRegistry, ClaimRegistryClient};

fn setup() -> (Env, ClaimRegistryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ClaimRegistry, ());
    let client = ClaimRegistryClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_claim_lifecycle_events() {
    let (env, client) = setup();
    let project = Address::generate(&env);
    let vendor = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let otp_server = Address::generate(&env);
    let token = Address::generate(&env);

    let id = client.create_claim(&project, &vendor, &beneficiary, &otp_server, &token);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("claim_new").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let data: ClaimCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ClaimCreated {
            claim_id: id,
            project: project.clone(),
            vendor: vendor.clone(),
            beneficiary,
            token,
            otp_server,
        }
    );

    let hash: BytesN<32> = env.crypto().keccak256(&Bytes::from_slice(&env, b"4321")).into();
    client.add_otp_to_claim(&id, &hash, &500);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("otp_added").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let data: OtpAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, OtpAdded { claim_id: id, expiry: 500 });

    client.process_claim(&id, &Bytes::from_slice(&env, b"4321"));

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("processed").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let data: ClaimProcessed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ClaimProcessed {
            claim_id: id,
            project,
            vendor,
        }
    );
}
