//! Fetch adapter tests against a local backend serving canned responses.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use krx_dashboard_market_data::models::StockPrice;
use krx_dashboard_market_data::{
    BasDate, BondMarket, BondRequest, ClientConfig, FailureKind, FetchError, IndexMarket,
    IndexRequest, KrxClient, NameFilter, QuotationRequest, Record, StockMarket, StockRequest,
};

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn trading_date() -> BasDate {
    BasDate::from_ymd(2024, 12, 27).unwrap()
}

async fn stock_data(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let expected = params.get("date").map(String::as_str) == Some("20241227")
        && params.get("type").map(String::as_str) == Some("KOSDAQ");
    if !expected {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad query" })));
    }
    (
        StatusCode::OK,
        Json(json!([
            { "isuCd": "247540", "isuNm": "에코프로비엠", "tddClsprc": "112,400", "flucRt": -2.35 },
            { "isuCd": "086520", "isuNm": "에코프로", "tddClsprc": null, "flucRt": "-" }
        ])),
    )
}

#[tokio::test]
async fn test_get_decodes_trading_info() {
    let base = spawn_backend(Router::new().route("/api/stock-data", get(stock_data))).await;
    let client = KrxClient::new(ClientConfig::new(base));

    let rows = client
        .get(&StockRequest {
            market: StockMarket::Kosdaq,
            date: trading_date(),
        })
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].field("isuNm"), Some("에코프로비엠"));
    assert_eq!(rows[0].field("tddClsprc"), Some("112,400"));
    assert_eq!(rows[0].field("flucRt"), Some("-2.35"));
    assert_eq!(rows[1].field("tddClsprc"), None);
    assert_eq!(rows[1].field("flucRt"), Some("-"));
}

#[tokio::test]
async fn test_server_error_maps_to_http_failure() {
    let router = Router::new().route(
        "/api/market-data",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_backend(router).await;
    let client = KrxClient::new(ClientConfig::new(base));
    let request = IndexRequest {
        market: IndexMarket::Kospi,
        date: trading_date(),
    };

    let error = client.get(&request).await.unwrap_err();
    assert!(matches!(error, FetchError::Http { status: 500, .. }));

    let fetched = client.fetch(&request).await;
    assert!(fetched.data.is_empty());
    assert_eq!(fetched.failure_kind(), Some(FailureKind::Http));
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_failure() {
    let router = Router::new().route(
        "/api/bond/trading-info/GENERAL",
        get(|| async { "[{\"isuNm\": \"국고채\"" }),
    );
    let base = spawn_backend(router).await;
    let client = KrxClient::new(ClientConfig::new(base));

    let fetched = client
        .fetch(&BondRequest {
            market: BondMarket::General,
            date: trading_date(),
        })
        .await;

    assert!(fetched.data.is_empty());
    assert_eq!(fetched.failure_kind(), Some(FailureKind::Parse));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = KrxClient::new(ClientConfig::new(format!("http://{}/api", addr)));
    let fetched = client
        .fetch(&IndexRequest {
            market: IndexMarket::Krx,
            date: trading_date(),
        })
        .await;

    assert!(fetched.data.is_empty());
    assert_eq!(fetched.failure_kind(), Some(FailureKind::Network));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let router = Router::new().route(
        "/api/market-data",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!([]))
        }),
    );
    let base = spawn_backend(router).await;
    let client =
        KrxClient::new(ClientConfig::new(base).with_timeout(Duration::from_millis(100)));

    let error = client
        .get(&IndexRequest {
            market: IndexMarket::Kospi,
            date: trading_date(),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::Timeout { .. }));
    assert_eq!(error.kind(), FailureKind::Network);
}

async fn stock_price(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: usize = params
        .get("pageNo")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let term = params.get("likeItmsNm").cloned().unwrap_or_default();
    Json(json!({
        "items": [
            { "basDt": "20241227", "itmsNm": format!("{} {}", term, page), "clpr": 53000 }
        ],
        "totalCount": 47,
        "pageNo": page,
        "numOfRows": 15
    }))
}

#[tokio::test]
async fn test_quotation_envelope_and_filter() {
    let base = spawn_backend(Router::new().route("/api/stock-quotation/price", get(stock_price))).await;
    let client = KrxClient::new(ClientConfig::new(base));

    let request = QuotationRequest::<StockPrice>::new(trading_date())
        .page(3, 15)
        .filter(NameFilter::new("삼성", true));
    let envelope = client.get(&request).await.unwrap();

    assert_eq!(envelope.total_count, 47);
    assert_eq!(envelope.page_no, 3);
    assert_eq!(envelope.items.len(), 1);
    assert_eq!(envelope.items[0].field("itmsNm"), Some("삼성 3"));
    assert_eq!(envelope.items[0].field("clpr"), Some("53000"));
}

#[tokio::test]
async fn test_quotation_failure_yields_empty_envelope() {
    let router = Router::new().route(
        "/api/stock-quotation/price",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let base = spawn_backend(router).await;
    let client = KrxClient::new(ClientConfig::new(base));

    let fetched = client
        .fetch(&QuotationRequest::<StockPrice>::new(trading_date()))
        .await;

    assert!(fetched.data.items.is_empty());
    assert_eq!(fetched.data.total_count, 0);
    assert_eq!(fetched.data.page_no, 1);
    assert!(fetched.is_failure());
}
