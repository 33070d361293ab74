mod common;

use std::sync::Arc;

use coinpager::config::SourceConfig;
use coinpager::fetch::{FetchError, HttpPageFetcher, PageFetcher, PageIndex};
use coinpager::store::{DatasetStore, PageOutcome};
use common::mock_source::{CapturedRequest, MockResponse, MockSource};

const TWO_COINS: &str = r#"{"data": [
    {"id": 1, "name": "Bitcoin", "symbol": "btc", "image": "https://img/btc.png",
     "currentPrice": 64000.5, "priceChangePercentage24h": 1.5},
    {"id": "ethereum", "name": "Ether", "symbol": "eth", "image": "https://img/eth.png",
     "currentPrice": 3100, "priceChangePercentage24h": -0.25, "marketCap": 1}
]}"#;

fn fetcher_for(server: &MockSource) -> HttpPageFetcher {
    let source = SourceConfig {
        base_url: server.base_url(),
        currency: "eur".to_string(),
        page_size: 10,
        connect_timeout_seconds: 2,
    };
    HttpPageFetcher::new(&source).expect("fetcher should build")
}

fn page(n: u32) -> PageIndex {
    PageIndex::new(n).unwrap()
}

#[tokio::test]
async fn fetch_page_decodes_items_in_server_order() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::json(TWO_COINS)).await;
    let fetcher = fetcher_for(&server);

    let coins = fetcher.fetch_page(page(1)).await.unwrap();

    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].id.as_str(), "1");
    assert_eq!(coins[0].name, "Bitcoin");
    assert_eq!(coins[1].symbol, "eth");
    assert_eq!(coins[1].current_price, 3100.0);
    assert_eq!(coins[1].price_change_percentage_24h, -0.25);
}

#[tokio::test]
async fn request_carries_currency_page_and_page_size() {
    let server = MockSource::start().await;
    let fetcher = fetcher_for(&server);

    fetcher.fetch_page(page(3)).await.unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/coin-prices-all");
    assert_eq!(request.param("currency").as_deref(), Some("eur"));
    assert_eq!(request.param("page").as_deref(), Some("3"));
    assert_eq!(request.param("pageSize").as_deref(), Some("10"));
}

#[tokio::test]
async fn empty_data_array_is_a_successful_empty_page() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::json(r#"{"data": []}"#)).await;
    let fetcher = fetcher_for(&server);

    let coins = fetcher.fetch_page(page(9)).await.unwrap();
    assert!(coins.is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::error(500, "boom")).await;
    let fetcher = fetcher_for(&server);

    let err = fetcher.fetch_page(page(1)).await.unwrap_err();
    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_json_is_malformed() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::json("<html>not json</html>")).await;
    let fetcher = fetcher_for(&server);

    let err = fetcher.fetch_page(page(1)).await.unwrap_err();
    assert_eq!(err.kind(), "malformed");
}

#[tokio::test]
async fn missing_data_field_is_malformed() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::json(r#"{"items": []}"#)).await;
    let fetcher = fetcher_for(&server);

    let err = fetcher.fetch_page(page(1)).await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed { .. }));
}

#[tokio::test]
async fn unreachable_source_is_a_connection_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = SourceConfig {
        base_url: format!("http://{}", addr),
        ..SourceConfig::default()
    };
    let fetcher = HttpPageFetcher::new(&source).unwrap();

    let err = fetcher.fetch_page(page(1)).await.unwrap_err();
    assert_eq!(err.kind(), "connection");
}

#[tokio::test]
async fn store_pages_through_http_until_exhausted() {
    let server = MockSource::start().await;
    server.enqueue(MockResponse::json(TWO_COINS)).await;
    server.enqueue(MockResponse::error(502, "bad gateway")).await;
    server.enqueue(MockResponse::json(TWO_COINS)).await;
    server.enqueue(MockResponse::json(r#"{"data": []}"#)).await;
    let mut store = DatasetStore::new(Arc::new(fetcher_for(&server)));

    assert!(store.request_next_page().await.grew());
    assert!(matches!(store.request_next_page().await, PageOutcome::Failed { .. }));
    assert!(store.request_next_page().await.grew());
    assert!(matches!(store.request_next_page().await, PageOutcome::Exhausted { .. }));
    assert_eq!(store.request_next_page().await, PageOutcome::Skipped);

    let pages: Vec<String> = server
        .captured_requests()
        .await
        .iter()
        .filter_map(|r| r.param("page"))
        .collect();
    assert_eq!(pages, vec!["1", "2", "2", "3"]);
    assert_eq!(store.coins().len(), 4);
}

#[test]
fn captured_params_are_percent_decoded() {
    let request = CapturedRequest {
        method: "GET".to_string(),
        path: "/coin-prices-all".to_string(),
        query: "currency=us%24d&page=2&label=a+b".to_string(),
    };
    assert_eq!(request.param("currency").as_deref(), Some("us$d"));
    assert_eq!(request.param("page").as_deref(), Some("2"));
    assert_eq!(request.param("label").as_deref(), Some("a b"));
    assert_eq!(request.param("pageSize"), None);
}
