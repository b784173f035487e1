//! Currency pair conversion from ExchangeRate-API.

use serde::Deserialize;
use tracing::warn;

use super::{fetch_json, ApiOutcome, Provider, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    /// Uppercased ISO code.
    pub from: String,
    /// Uppercased ISO code.
    pub to: String,
    pub rate: f64,
    pub converted: f64,
}

#[derive(Deserialize)]
struct PairResponse {
    result: String,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    conversion_rate: Option<f64>,
    conversion_result: Option<f64>,
}

pub fn fetch(
    transport: &dyn Transport,
    base: &str,
    key: Option<&str>,
    amount: f64,
    from: &str,
    to: &str,
) -> ApiOutcome<Conversion> {
    let Some(key) = key else {
        return ApiOutcome::ConfigMissing;
    };

    let from = from.to_uppercase();
    let to = to.to_uppercase();
    let amount_text = amount.to_string();

    let Some(response) = fetch_json::<PairResponse>(
        transport,
        Provider::Currency,
        base,
        &["v6", key, "pair", from.as_str(), to.as_str(), amount_text.as_str()],
        &[],
    ) else {
        return ApiOutcome::UpstreamFailure;
    };

    if response.result != "success" {
        warn!(
            provider = "currency",
            error_type = response.error_type.as_deref().unwrap_or("unknown"),
            "conversion was not successful"
        );
        return ApiOutcome::UpstreamFailure;
    }

    let (Some(rate), Some(converted)) = (response.conversion_rate, response.conversion_result)
    else {
        warn!(provider = "currency", "successful response is missing conversion fields");
        return ApiOutcome::UpstreamFailure;
    };

    ApiOutcome::Success(Conversion {
        amount,
        from,
        to,
        rate,
        converted,
    })
}

#[cfg(test)]
mod tests {
    use super::super::transport::stub::StubTransport;
    use super::*;

    const BASE: &str = "https://rates.test";

    #[test]
    fn test_success() {
        let stub = StubTransport::new().respond(
            200,
            r#"{"result":"success","base_code":"USD","target_code":"EUR","conversion_rate":0.9,"conversion_result":9.0}"#,
        );

        assert_eq!(
            fetch(&stub, BASE, Some("k"), 10.0, "usd", "eur"),
            ApiOutcome::Success(Conversion {
                amount: 10.0,
                from: "USD".to_string(),
                to: "EUR".to_string(),
                rate: 0.9,
                converted: 9.0,
            })
        );
        assert_eq!(
            stub.calls().borrow().as_slice(),
            ["https://rates.test/v6/k/pair/USD/EUR/10"]
        );
    }

    #[test]
    fn test_fractional_amount_in_path() {
        let stub = StubTransport::new().respond(404, "");
        fetch(&stub, BASE, Some("k"), 12.5, "gbp", "jpy");
        assert_eq!(
            stub.calls().borrow().as_slice(),
            ["https://rates.test/v6/k/pair/GBP/JPY/12.5"]
        );
    }

    #[test]
    fn test_error_result_with_ok_status() {
        let stub = StubTransport::new()
            .respond(200, r#"{"result":"error","error-type":"unsupported-code"}"#);
        assert_eq!(
            fetch(&stub, BASE, Some("k"), 1.0, "usd", "zzz"),
            ApiOutcome::UpstreamFailure
        );
    }

    #[test]
    fn test_success_without_fields() {
        let stub = StubTransport::new().respond(200, r#"{"result":"success"}"#);
        assert_eq!(
            fetch(&stub, BASE, Some("k"), 1.0, "usd", "eur"),
            ApiOutcome::UpstreamFailure
        );
    }

    #[test]
    fn test_no_key() {
        let stub = StubTransport::new();
        assert_eq!(
            fetch(&stub, BASE, None, 1.0, "usd", "eur"),
            ApiOutcome::ConfigMissing
        );
        assert!(stub.calls().borrow().is_empty());
    }
}
