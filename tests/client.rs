//! `MarketClient` against a mock HTTP server: NSE option chain and chart
//! payload normalization, error mapping, and URL handling.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nse_scope::MarketClient;
use nse_scope::error::ScopeError;
use nse_scope::source::MarketDataSource;
use nse_scope::types::chart::Ticker;
use nse_scope::types::{ChartInterval, ChartRange};

fn nse_payload() -> serde_json::Value {
    json!({
        "records": {
            "expiryDates": ["26-Dec-2024", "02-Jan-2025"],
            "timestamp": "20-Dec-2024 15:30:00",
            "underlyingValue": 23587.5,
            "data": [
                {
                    "strikePrice": 23550,
                    "expiryDate": "26-Dec-2024",
                    "CE": {
                        "strikePrice": 23550,
                        "expiryDate": "26-Dec-2024",
                        "openInterest": 41250,
                        "changeinOpenInterest": -1200,
                        "totalTradedVolume": 812345,
                        "impliedVolatility": 13.9,
                        "lastPrice": 142.3
                    },
                    "PE": {
                        "strikePrice": 23550,
                        "expiryDate": "26-Dec-2024",
                        "openInterest": 52010,
                        "changeinOpenInterest": 3050,
                        "totalTradedVolume": 901122,
                        "impliedVolatility": 31.2,
                        "lastPrice": 98.65
                    }
                },
                {
                    "strikePrice": 23500,
                    "expiryDate": "26-Dec-2024",
                    "PE": {
                        "openInterest": 60000,
                        "lastPrice": 75.1
                    }
                },
                {
                    "strikePrice": 23550,
                    "expiryDate": "02-Jan-2025",
                    "CE": { "lastPrice": 260.0, "impliedVolatility": 14.5 }
                }
            ]
        },
        "filtered": {}
    })
}

fn chart_payload() -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "RELIANCE.NS", "currency": "INR", "regularMarketPrice": 1230.5 },
                "timestamp": [1733716800, 1733803200, 1733889600, 1733976000],
                "indicators": {
                    "quote": [{
                        "open":   [1290.0, 1281.0, null, 1270.0],
                        "high":   [1295.5, 1288.0, null, 1276.4],
                        "low":    [1279.1, 1270.2, null, 1260.0],
                        "close":  [1282.4, 1275.0, null, 1265.9],
                        "volume": [9120000, 8800000, null, null]
                    }]
                }
            }],
            "error": null
        }
    })
}

async fn client_for(server: &MockServer) -> MarketClient {
    MarketClient::with_base_urls(server.uri(), server.uri()).unwrap()
}

// ===================================================================
// NSE option chain
// ===================================================================

#[tokio::test]
async fn test_expiry_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/option-chain-indices"))
        .and(query_param("symbol", "NIFTY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nse_payload()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let expiries = client.get_expiry_dates("NIFTY").await.unwrap();
    assert_eq!(expiries, vec!["26-Dec-2024", "02-Jan-2025"]);
}

#[tokio::test]
async fn test_option_chain_is_normalized_for_one_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/option-chain-indices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nse_payload()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let chain = client
        .fetch_option_chain("NIFTY", "26-Dec-2024")
        .await
        .unwrap();

    assert_eq!(chain.underlying(), "NIFTY");
    assert_eq!(chain.expiry().to_string(), "2024-12-26");
    assert_eq!(chain.underlying_value(), Some(23587.5));
    assert_eq!(chain.strikes().collect::<Vec<_>>(), vec![23500.0, 23550.0]);

    let low = &chain.rows()[0];
    assert!(low.call.is_none());
    let low_put = low.put.as_ref().unwrap();
    assert_eq!(low_put.last_price, Some(75.1));
    assert_eq!(low_put.implied_volatility, None);

    let atm = &chain.rows()[1];
    let ce = atm.call.as_ref().unwrap();
    assert_eq!(ce.last_price, Some(142.3));
    assert_eq!(ce.open_interest, Some(41250.0));
    assert_eq!(ce.change_in_oi, Some(-1200.0));
    assert_eq!(ce.volume, Some(812345));
}

#[tokio::test]
async fn test_unparseable_expiry_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nse_payload()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_option_chain("NIFTY", "2024-12-26").await.unwrap_err();
    assert!(matches!(err, ScopeError::InputValidation(_)), "{err:?}");
}

#[tokio::test]
async fn test_blocked_response_is_a_json_error() {
    // NSE answers `{}` to clients it does not like.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_expiry_dates("NIFTY").await.unwrap_err();
    assert!(matches!(err, ScopeError::Json(_)), "{err:?}");
}

// ===================================================================
// Chart history
// ===================================================================

#[tokio::test]
async fn test_chart_skips_bars_without_ohlc() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/RELIANCE.NS"))
        .and(query_param("range", "3mo"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_payload()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let series = client
        .get_chart(&Ticker::equity("reliance"), ChartRange::ThreeMonths, ChartInterval::OneDay)
        .await
        .unwrap();

    assert_eq!(series.symbol(), "RELIANCE.NS");
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![1282.4, 1275.0, 1265.9]);
    assert_eq!(series.latest().volume, 0);
    assert_eq!(series.bars()[0].volume, 9_120_000);
    assert_eq!(series.bars()[0].timestamp.timestamp(), 1733716800);
}

#[tokio::test]
async fn test_chart_provider_error_is_structured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_chart(&Ticker::equity("NOPE"), ChartRange::OneMonth, ChartInterval::OneDay)
        .await
        .unwrap_err();
    match &err {
        ScopeError::Provider(body) => assert_eq!(body.code.as_deref(), Some("Not Found")),
        other => panic!("Expected ScopeError::Provider, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unstructured_failure_is_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_expiry_dates("NIFTY").await.unwrap_err();
    match err {
        ScopeError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("Expected ScopeError::HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_chart_result_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": { "result": [], "error": null }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_price_series(&Ticker::equity("TCS"), ChartRange::OneMonth, ChartInterval::OneHour)
        .await
        .unwrap_err();
    assert!(matches!(err, ScopeError::InputValidation(_)), "{err:?}");
}

// ===================================================================
// Client construction
// ===================================================================

#[test]
fn test_base_url_trailing_slash_is_stripped() {
    let client =
        MarketClient::with_base_urls("https://www.nseindia.com/", "https://query1.finance.yahoo.com/")
            .unwrap();
    assert_eq!(client.nse_base_url(), "https://www.nseindia.com");
    assert_eq!(client.chart_base_url(), "https://query1.finance.yahoo.com");
}
