//! Currency CLI
//!
//! Command-line interface for the currency MCP server.

use anyhow::Result;
use clap::{Parser, Subcommand};

use currency_client::{ClientError, CurrencyClient, DEFAULT_MCP_SERVER_URL};
use currency_types::{CurrencyCode, DateOrLatest, RateError, RateErrorBody, RateQuery};

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency MCP server CLI client", long_about = None)]
struct Cli {
    /// URL of the MCP endpoint
    #[arg(long, env = "MCP_SERVER_URL", default_value = DEFAULT_MCP_SERVER_URL)]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an exchange rate
    Rate {
        /// Currency to convert from (e.g. USD)
        #[arg(long, default_value = CurrencyCode::DEFAULT_FROM)]
        from: String,
        /// Currency to convert to (e.g. EUR)
        #[arg(long, default_value = CurrencyCode::DEFAULT_TO)]
        to: String,
        /// Date (YYYY-MM-DD) or "latest"
        #[arg(long, default_value = DateOrLatest::LATEST)]
        date: String,
    },
    /// List the tools the server advertises
    Tools,
    /// Check server health
    Health,
}

fn retry_hint(err: &RateError) -> &'static str {
    if err.is_transient() {
        "✗ Lookup failed; retrying later may succeed"
    } else {
        "✗ Lookup failed; retrying the same request will not help"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CurrencyClient::new(&cli.server_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Server is healthy");
            } else {
                println!("✗ Server is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Tools => {
            let tools = client.list_tools().await?;
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }

        Commands::Rate { from, to, date } => {
            let query = RateQuery::new(from, to, date);
            match client.get_exchange_rate(&query).await {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(ClientError::Tool(err)) => {
                    let body = RateErrorBody::from(&err);
                    eprintln!("{}", serde_json::to_string_pretty(&body)?);
                    eprintln!("{}", retry_hint(&err));
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
