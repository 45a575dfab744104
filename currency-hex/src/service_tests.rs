//! RateService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{Map, Value, json};

    use currency_types::{DateOrLatest, ExchangeRateProvider, RateError, RateQuery, RateResult};

    use crate::RateService;

    /// Provider stub that answers from the query itself and records every call.
    pub struct StubProvider {
        calls: Mutex<Vec<RateQuery>>,
        fail_with: Option<RateError>,
    }

    impl StubProvider {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        pub fn failing(err: RateError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(err),
            }
        }

        pub fn calls(&self) -> Vec<RateQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    /// Builds the payload the stub hands back for `query`.
    pub fn echo_result(query: &RateQuery) -> RateResult {
        let date = match &query.date {
            DateOrLatest::Latest => "2024-05-17".to_string(),
            DateOrLatest::On(date) => date.clone(),
        };
        let mut rates = Map::new();
        rates.insert(query.to.to_string(), json!(0.5));
        let payload = json!({
            "amount": 1.0,
            "base": query.from,
            "date": date,
            "rates": rates,
        });
        match payload {
            Value::Object(map) => RateResult::from_json(map).unwrap(),
            _ => unreachable!(),
        }
    }

    #[async_trait]
    impl ExchangeRateProvider for StubProvider {
        async fn fetch_rates(&self, query: &RateQuery) -> Result<RateResult, RateError> {
            self.calls.lock().unwrap().push(query.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(echo_result(query)),
            }
        }
    }

    #[tokio::test]
    async fn test_lookup_passes_query_through() {
        let stub = Arc::new(StubProvider::new());
        let service = RateService::from_shared(stub.clone());

        let query = RateQuery::new("GBP", "INR", "2024-01-15");
        let result = service.get_exchange_rate(query.clone()).await.unwrap();

        assert_eq!(stub.calls(), vec![query]);
        assert_eq!(result.base(), Some("GBP"));
        assert_eq!(result.date(), Some("2024-01-15"));
        assert_eq!(result.rate_for("INR"), Some(0.5));
    }

    #[tokio::test]
    async fn test_default_query() {
        let stub = Arc::new(StubProvider::new());
        let service = RateService::from_shared(stub.clone());

        service
            .get_exchange_rate(RateQuery::default())
            .await
            .unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].from.as_str(), "USD");
        assert_eq!(calls[0].to.as_str(), "EUR");
        assert!(calls[0].date.is_latest());
    }

    #[tokio::test]
    async fn test_errors_are_returned_not_retried() {
        let stub = Arc::new(StubProvider::failing(RateError::upstream(
            Some(503),
            "Service Unavailable",
        )));
        let service = RateService::from_shared(stub.clone());

        let result = service.get_exchange_rate(RateQuery::default()).await;

        assert!(matches!(
            result,
            Err(RateError::UpstreamUnavailable {
                status: Some(503),
                ..
            })
        ));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_queries_are_not_cached() {
        let stub = Arc::new(StubProvider::new());
        let service = RateService::from_shared(stub.clone());

        for _ in 0..3 {
            service
                .get_exchange_rate(RateQuery::default())
                .await
                .unwrap();
        }

        assert_eq!(stub.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_service_survives_failures() {
        let service = RateService::new(StubProvider::failing(RateError::MalformedUpstreamResponse(
            "expected value at line 1 column 1".into(),
        )));

        for _ in 0..2 {
            let err = service
                .get_exchange_rate(RateQuery::default())
                .await
                .unwrap_err();
            assert!(matches!(err, RateError::MalformedUpstreamResponse(_)));
        }
    }
}
