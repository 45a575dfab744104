//! MCP tool adapter: exposes `get_exchange_rate` to agent runtimes.
//!
//! Lookup failures are returned as tool results with `isError: true` and a
//! JSON [`RateErrorBody`], never as JSON-RPC errors. The agent sees why the
//! lookup failed and the server keeps running.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use currency_types::{GetExchangeRateArgs, RateErrorBody, RateQuery};

use crate::RateService;

const SERVER_NAME: &str = "currency-mcp-server";

const INSTRUCTIONS: &str = "Currency MCP server. Use get_exchange_rate to look up exchange \
     rates between two currencies, either the latest published rates or those of a given date.";

/// MCP server handler with the currency tools.
#[derive(Clone)]
pub struct CurrencyTools {
    service: RateService,
    tool_router: ToolRouter<CurrencyTools>,
}

#[tool_router]
impl CurrencyTools {
    pub fn new(service: RateService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "get_exchange_rate",
        description = "Use this to get current exchange rate. Returns the exchange rate data \
                       (amount, base, date, rates), or an error if the request fails. \
                       currency_from: the currency to convert from (e.g., \"USD\"). \
                       currency_to: the currency to convert to (e.g., \"EUR\"). \
                       currency_date: the date for the exchange rate or \"latest\"."
    )]
    pub async fn get_exchange_rate(
        &self,
        Parameters(args): Parameters<GetExchangeRateArgs>,
    ) -> Result<CallToolResult, McpError> {
        let query = RateQuery::from(args);
        match self.service.get_exchange_rate(query).await {
            Ok(result) => Ok(CallToolResult::success(vec![Content::json(&result)?])),
            Err(err) => Ok(CallToolResult::error(vec![Content::json(
                RateErrorBody::from(&err),
            )?])),
        }
    }
}

#[tool_handler]
impl ServerHandler for CurrencyTools {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}
