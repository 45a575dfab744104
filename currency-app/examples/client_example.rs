//! Client example demonstrating an exchange rate lookup against a running server.
//!
//! Run with: cargo run -p currency-app --example client_example
//!
//! The server forwards to the public Frankfurter API unless `FRANKFURTER_URL`
//! points elsewhere.

use currency_client::CurrencyClient;
use currency_hex::{RateService, inbound::HttpServer};
use currency_types::RateQuery;
use currency_upstream::{DEFAULT_FRANKFURTER_URL, FrankfurterProvider};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    let upstream =
        std::env::var("FRANKFURTER_URL").unwrap_or_else(|_| DEFAULT_FRANKFURTER_URL.to_string());

    println!("🚀 Starting server on port {port}...");
    println!("   Upstream: {upstream}");

    // Start server in background
    let service = RateService::new(FrankfurterProvider::new(&upstream)?);
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let client = CurrencyClient::new(format!("http://127.0.0.1:{port}/mcp"));

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Tool discovery
    for tool in client.list_tools().await? {
        println!("✅ Tool advertised: {}", tool.name);
    }

    // Default lookup
    let latest = client.get_exchange_rate(&RateQuery::default()).await?;
    println!(
        "✅ 1 {} = {:?} EUR on {}",
        latest.base().unwrap_or("?"),
        latest.rate_for("EUR"),
        latest.date().unwrap_or("?")
    );

    // Historical lookup
    let historical = client
        .get_exchange_rate(&RateQuery::new("GBP", "JPY", "2024-01-02"))
        .await?;
    println!(
        "✅ 1 {} = {:?} JPY on {}",
        historical.base().unwrap_or("?"),
        historical.rate_for("JPY"),
        historical.date().unwrap_or("?")
    );

    // Unknown currency surfaces as a tool error
    match client
        .get_exchange_rate(&RateQuery::latest("USD", "XXX"))
        .await
    {
        Ok(result) => println!("   Unexpected success: {:?}", result.rates()),
        Err(e) => println!("✅ Unknown currency rejected: {e}"),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
