use eth_balance_checker::{config::Config, BalanceClient, BalanceQuery};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Queries the configured account's balance once
/// 4. Prints the result, or exits with a code identifying the failure class
#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Our own crate at info, dependencies quieter
    let filter = EnvFilter::from_default_env()
        .add_directive("eth_balance_checker=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let query = BalanceQuery::new(&config.ethereum_rpc_url, &config.account_address);
    if !query.has_well_formed_address() {
        warn!(
            "{} does not look like a 20-byte hex address; the node will decide",
            query.address()
        );
    }

    let client = BalanceClient::http(config.rpc_timeout())?;

    println!("Checking Ethereum balance for address: {}", query.address());
    match client.get_balance(&query).await {
        Ok(balance) => {
            println!("Balance: {} wei", balance);
            println!("         {} ETH", balance.to_ether_string());
            Ok(())
        }
        Err(e) => {
            error!("Balance query failed: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
