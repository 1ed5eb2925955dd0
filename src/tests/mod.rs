use std::time::Duration;

use cosmrs::{
    bank::MsgSend,
    proto::cosmos::tx::v1beta1::{AuthInfo as ProtoAuthInfo, TxRaw as ProtoTxRaw},
    tx::Msg as _,
    AccountId, Any, Coin,
};
use prost::Message as _;
use serde::Deserialize;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    account::{self, SignerAccount},
    build_tx::TxRequest,
    client::Client,
    config::Node,
    deadline::Deadline,
    interact::{self, error::CreateAndSign, query, simulate},
    signer::Signer,
    signing_key,
};

const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
     abandon abandon abandon about";

const CONTRACT_ADDRESS: &str =
    "terra18vd8fpwxzck93qlwghaj6arh4p7c5n896xzem5qlwghaj6arh4psvept0h";

fn node_config(lcd_url: &str) -> Node {
    toml::from_str(&format!(
        r#"lcd_url = "{lcd_url}"
json_rpc_url = "http://localhost:26657"
address_prefix = "terra"
chain_id = "columbus-5"
fee_denom = "uluna"
gas_adjustment_numerator = 3
gas_adjustment_denominator = 2
gas_price_numerator = 15
gas_price_denominator = 100"#,
    ))
    .unwrap()
}

fn test_signer(config: &Node) -> Signer {
    let key =
        signing_key::from_mnemonic(TEST_MNEMONIC, signing_key::DEFAULT_TERRA_HD_PATH, "").unwrap();

    Signer::from_config(config, key).unwrap()
}

fn sample_messages(sender: &str) -> Vec<Any> {
    vec![MsgSend {
        from_address: sender.parse().unwrap(),
        to_address: AccountId::new("terra", &[9; 20]).unwrap(),
        amount: vec![Coin::new(1_000_000, "uluna").unwrap()],
    }
    .to_any()
    .unwrap()]
}

async fn mount_account(server: &MockServer, address: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/cosmos/auth/v1beta1/accounts/{address}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "@type": "/cosmos.auth.v1beta1.BaseAccount",
                "address": address,
                "account_number": "1234",
                "sequence": "7"
            }
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn unresolved_request_completes_with_three_reads() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    mount_account(&server, signer.address(), 1).await;

    Mock::given(method("POST"))
        .and(path("/cosmos/tx/v1beta1/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gas_info": {"gas_wanted": "0", "gas_used": "75000"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/terra/tx/v1beta1/compute_tax"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tax_amount": [{"denom": "uusd", "amount": "1500"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TxRequest::new(sample_messages(signer.address()));

    let signed = interact::create_and_sign(&client, &config, &signer, request, Deadline::None)
        .await
        .unwrap();

    // ceil(75_000 * 3 / 2) = 112_500; gas fee = ceil(112_500 * 15 / 100).
    assert_eq!(signed.gas_limit(), 112_500);
    assert_eq!(
        signed.fee_amount().to_vec(),
        vec![
            Coin::new(16_875, "uluna").unwrap(),
            Coin::new(1_500, "uusd").unwrap(),
        ],
    );

    // The freshly resolved sequence must be the one bound into the
    // signed bytes.
    let raw = ProtoTxRaw::decode(signed.bytes()).unwrap();
    let auth_info = ProtoAuthInfo::decode(raw.auth_info_bytes.as_slice()).unwrap();

    assert_eq!(auth_info.signer_infos[0].sequence, 7);
    assert_eq!(auth_info.fee.unwrap().gas_limit, 112_500);
    assert_eq!(raw.signatures.len(), 1);
    assert!(!raw.signatures[0].is_empty());
}

#[tokio::test]
async fn fully_specified_request_performs_no_reads() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    let mut request = TxRequest::new(sample_messages(signer.address()));

    request.account = Some(SignerAccount {
        account_number: 1,
        sequence: 2,
    });
    request.gas_limit = Some(200_000);
    request.fee_amount = Some(vec![Coin::new(30_000, "uluna").unwrap()]);

    let signed = interact::create_and_sign(&client, &config, &signer, request, Deadline::None)
        .await
        .unwrap();

    assert_eq!(signed.gas_limit(), 200_000);
    assert_eq!(
        signed.fee_amount().to_vec(),
        vec![Coin::new(30_000, "uluna").unwrap()],
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn explicit_fee_skips_tax_computation() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    mount_account(&server, signer.address(), 1).await;

    Mock::given(method("POST"))
        .and(path("/cosmos/tx/v1beta1/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gas_info": {"gas_wanted": "0", "gas_used": "60000"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/terra/tx/v1beta1/compute_tax"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut request = TxRequest::new(sample_messages(signer.address()));

    request.fee_amount = Some(vec![Coin::new(42, "uluna").unwrap()]);

    let signed = interact::create_and_sign(&client, &config, &signer, request, Deadline::None)
        .await
        .unwrap();

    assert_eq!(signed.gas_limit(), 90_000);
    assert_eq!(
        signed.fee_amount().to_vec(),
        vec![Coin::new(42, "uluna").unwrap()],
    );
}

#[tokio::test]
async fn missing_account_is_reported_as_not_found() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    Mock::given(method("GET"))
        .and(path(format!(
            "/cosmos/auth/v1beta1/accounts/{}",
            signer.address()
        )))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 5,
            "message": "rpc error: code = NotFound desc = account not found"
        })))
        .mount(&server)
        .await;

    let request = TxRequest::new(sample_messages(signer.address()));

    let result = interact::create_and_sign(&client, &config, &signer, request, Deadline::None).await;

    assert!(matches!(
        result,
        Err(CreateAndSign::Account(account::error::Error::NotFound(_))),
    ));
}

#[tokio::test]
async fn simulation_rejection_stops_the_pipeline() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    mount_account(&server, signer.address(), 1).await;

    Mock::given(method("POST"))
        .and(path("/cosmos/tx/v1beta1/simulate"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"code": 3, "message": "invalid request: malformed message"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/terra/tx/v1beta1/compute_tax"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = TxRequest::new(sample_messages(signer.address()));

    let result = interact::create_and_sign(&client, &config, &signer, request, Deadline::None).await;

    let Err(CreateAndSign::Simulation(simulate::error::Error::Rejected { body, .. })) = result
    else {
        panic!("expected a terminal simulation rejection");
    };

    assert!(body.contains("malformed message"));
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct QueryResult {
    query_result: ConfigResponse,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct ConfigResponse {
    owner: String,
}

#[tokio::test]
async fn wasm_query_decodes_contract_response() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let client = Client::from_config(&config).unwrap();

    // base64({"config":{}}) as the LCD expects it in `query_msg`.
    Mock::given(method("GET"))
        .and(path(format!(
            "/terra/wasm/v1beta1/contracts/{CONTRACT_ADDRESS}/store"
        )))
        .and(query_param("query_msg", "eyJjb25maWciOnt9fQ=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query_result": {"owner": "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result: QueryResult = query::wasm_smart(
        &client,
        CONTRACT_ADDRESS,
        &json!({"config": {}}),
        Deadline::None,
    )
    .await
    .unwrap();

    assert_eq!(
        result.query_result.owner,
        "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
    );
}

#[tokio::test]
async fn wasm_query_failure_preserves_body_text() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let client = Client::from_config(&config).unwrap();

    Mock::given(method("GET"))
        .and(path(format!(
            "/terra/wasm/v1beta1/contracts/{CONTRACT_ADDRESS}/store"
        )))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("contract query panicked: out of bounds"),
        )
        .mount(&server)
        .await;

    let result = query::wasm_smart::<_, QueryResult>(
        &client,
        CONTRACT_ADDRESS,
        &json!({"config": {}}),
        Deadline::None,
    )
    .await;

    let Err(query::error::Wasm::UnexpectedStatus { status, body }) = result else {
        panic!("expected the raw failure body to be preserved");
    };

    assert_eq!(status.as_u16(), 500);
    assert_eq!(body, "contract query panicked: out of bounds");
}

#[tokio::test]
async fn elapsed_deadline_cancels_account_resolution() {
    let server = MockServer::start().await;
    let config = node_config(&server.uri());
    let signer = test_signer(&config);
    let client = Client::from_config(&config).unwrap();

    Mock::given(method("GET"))
        .and(path(format!(
            "/cosmos/auth/v1beta1/accounts/{}",
            signer.address()
        )))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"account": {}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let request = TxRequest::new(sample_messages(signer.address()));

    let result = interact::create_and_sign(
        &client,
        &config,
        &signer,
        request,
        Deadline::after(Duration::from_millis(50)),
    )
    .await;

    assert!(matches!(
        result,
        Err(CreateAndSign::Account(account::error::Error::Cancelled(_))),
    ));
}
