//! Transforms API Server Binary
//!
//! Run with: `cargo run --bin stocks-server`

use stocks::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tracing is initialized in run_server(); RUST_LOG controls the level:
    //   RUST_LOG=stocks=debug cargo run --bin stocks-server
    let config = ServerConfig::from_env();

    println!("Starting transforms API server on http://{}", config.address());
    println!();
    println!("Available endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /transforms          - List registered transforms");
    println!("  POST /transforms/:name    - Apply a transform");
    println!();

    run_server(config).await?;

    Ok(())
}
