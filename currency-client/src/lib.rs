//! # Currency Client SDK
//!
//! A typed Rust client for the currency MCP server. Calls the
//! `get_exchange_rate` tool over streamable HTTP the same way an agent
//! runtime does.

use currency_types::{
    GET_EXCHANGE_RATE_TOOL, GetExchangeRateArgs, RateError, RateErrorBody, RateQuery, RateResult,
};
use reqwest::{Client, Url};
use rmcp::{
    ServiceExt,
    model::{CallToolRequestParams, CallToolResult, ClientInfo, JsonObject},
    service::{ClientInitializeError, RoleClient, RunningService, ServiceError},
    transport::StreamableHttpClientTransport,
};
use serde::de::DeserializeOwned;

/// MCP endpoint used when `MCP_SERVER_URL` is not set.
pub const DEFAULT_MCP_SERVER_URL: &str = "http://localhost:8080/mcp";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("MCP connect error: {0}")]
    Connect(#[from] ClientInitializeError),

    #[error("MCP service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Tool error: {0}")]
    Tool(RateError),

    #[error("Tool returned an error: {0}")]
    Remote(String),

    #[error("Tool returned no content")]
    EmptyResult,

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tool metadata as advertised by the server.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: serde_json::Value,
}

/// Currency MCP client.
pub struct CurrencyClient {
    server_url: String,
    http: Client,
}

impl CurrencyClient {
    /// Creates a new client for the given MCP endpoint URL.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Checks if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let mut url =
            Url::parse(&self.server_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.set_path("/health");
        url.set_query(None);

        let resp = self.http.get(url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Looks up an exchange rate through the `get_exchange_rate` tool.
    pub async fn get_exchange_rate(&self, query: &RateQuery) -> Result<RateResult, ClientError> {
        let args = serde_json::to_value(GetExchangeRateArgs::from(query))?;
        let arguments = match args {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        };
        let result = self.call_tool(GET_EXCHANGE_RATE_TOOL, arguments).await?;
        decode_rate_result(result)
    }

    /// Lists the tools the server advertises.
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>, ClientError> {
        let session = self.connect().await?;
        let listed = session.list_all_tools().await;
        let _ = session.cancel().await;

        Ok(listed?
            .into_iter()
            .map(|tool| ToolInfo {
                name: tool.name.to_string(),
                description: tool.description.map(|d| d.to_string()),
                input_schema: serde_json::Value::Object((*tool.input_schema).clone()),
            })
            .collect())
    }

    async fn connect(&self) -> Result<RunningService<RoleClient, ClientInfo>, ClientError> {
        let transport = StreamableHttpClientTransport::from_uri(self.server_url.clone());
        Ok(ClientInfo::default().serve(transport).await?)
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ClientError> {
        let session = self.connect().await?;
        let result = session
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_owned().into(),
                arguments,
                task: None,
            })
            .await;
        let _ = session.cancel().await;
        Ok(result?)
    }
}

fn first_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .iter()
        .find_map(|c| c.as_text().map(|t| t.text.as_str()))
}

fn parse_text<T: DeserializeOwned>(result: &CallToolResult) -> Result<T, ClientError> {
    let text = first_text(result).ok_or(ClientError::EmptyResult)?;
    Ok(serde_json::from_str(text)?)
}

/// Maps a raw tool result to the lookup outcome.
fn decode_rate_result(result: CallToolResult) -> Result<RateResult, ClientError> {
    if result.is_error.unwrap_or(false) {
        return match parse_text::<RateErrorBody>(&result) {
            Ok(body) => Err(ClientError::Tool(RateError::from(body))),
            Err(_) => Err(ClientError::Remote(
                first_text(&result).unwrap_or_default().to_string(),
            )),
        };
    }

    if let Some(structured) = result.structured_content.clone() {
        return Ok(serde_json::from_value(structured)?);
    }
    parse_text(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;

    #[test]
    fn test_client_creation() {
        let client = CurrencyClient::new(DEFAULT_MCP_SERVER_URL);
        assert_eq!(client.server_url(), "http://localhost:8080/mcp");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CurrencyClient::new("http://localhost:8080/mcp/");
        assert_eq!(client.server_url(), "http://localhost:8080/mcp");
    }

    #[test]
    fn test_decode_success() {
        let text = r#"{"amount":1.0,"base":"USD","date":"2024-05-17","rates":{"EUR":0.92}}"#;
        let result = CallToolResult::success(vec![Content::text(text)]);
        let rate = decode_rate_result(result).unwrap();
        assert_eq!(rate.rate_for("EUR"), Some(0.92));
    }

    #[test]
    fn test_decode_tool_error() {
        let body = RateErrorBody::from(&RateError::upstream(Some(404), "Not Found"));
        let text = serde_json::to_string(&body).unwrap();
        let result = CallToolResult::error(vec![Content::text(text)]);

        let err = decode_rate_result(result).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Tool(RateError::UpstreamUnavailable {
                status: Some(404),
                ..
            })
        ));
    }

    #[test]
    fn test_decode_unstructured_tool_error() {
        let result = CallToolResult::error(vec![Content::text("boom")]);
        let err = decode_rate_result(result).unwrap_err();
        assert!(matches!(err, ClientError::Remote(msg) if msg == "boom"));
    }

    #[test]
    fn test_decode_empty_result() {
        let result = CallToolResult::success(vec![]);
        assert!(matches!(
            decode_rate_result(result),
            Err(ClientError::EmptyResult)
        ));
    }
}
