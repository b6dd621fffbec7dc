//! Integration tests for `ViaCepClient` using wiremock HTTP mocks.

use brasa_storefront::services::ViaCepClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn well_formed_code_resolves_to_an_address() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "cep": "01310-100",
        "logradouro": "Avenida Paulista",
        "complemento": "de 612 a 1510 - lado par",
        "bairro": "Bela Vista",
        "localidade": "São Paulo",
        "uf": "SP",
        "ibge": "3550308",
        "ddd": "11"
    });

    Mock::given(method("GET"))
        .and(path("/ws/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = ViaCepClient::new(&server.uri());
    let address = client
        .lookup("01310-100")
        .await
        .expect("known code resolves");

    assert_eq!(address.postal_code, "01310-100");
    assert_eq!(address.street, "Avenida Paulista");
    assert_eq!(address.neighborhood, "Bela Vista");
    assert_eq!(address.city, "São Paulo");
    assert_eq!(address.region, "SP");
}

#[tokio::test]
async fn unknown_code_with_error_flag_resolves_to_none() {
    let server = MockServer::start().await;

    // ViaCEP reports unknown codes as 200 with an error flag.
    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"erro": true})))
        .mount(&server)
        .await;

    let client = ViaCepClient::new(&server.uri());
    assert!(client.lookup("99999999").await.is_none());
}

#[tokio::test]
async fn malformed_code_never_touches_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ViaCepClient::new(&server.uri());
    assert!(client.lookup("1234").await.is_none());
    assert!(client.lookup("not-a-code").await.is_none());
    assert!(client.lookup("").await.is_none());
}

#[tokio::test]
async fn server_error_is_normalized_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01310100/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ViaCepClient::new(&server.uri());
    assert!(client.lookup("01310100").await.is_none());
}

#[tokio::test]
async fn unparseable_body_is_normalized_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ViaCepClient::new(&server.uri());
    assert!(client.lookup("01310100").await.is_none());
}
