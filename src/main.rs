mod types;
mod util;
mod impls;
mod defines;
mod error;
mod exchange;
mod logging;
mod order;
mod report;
mod validate;

use clap::Parser;
use error::OrderError;
use exchange::BinanceFutures;
use logging::ActivityLog;
use order::OrderClient;
use types::*;
use validate::validate_input;

fn main() {
    // parse arguments via clap, usage errors exit from within clap
    let cmd_args = CommandlineArgs::parse();
    let profile = cmd_args.profile();

    match run(cmd_args) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            println!("{}", error_line(profile, &e));
            std::process::exit(1);
        }
    }
}

/// validate -> open log -> place order -> summary to print
fn run(cmd_args: CommandlineArgs) -> Result<String, OrderError> {
    let cmd_args = validate_input(cmd_args)?;
    let profile = cmd_args.profile();
    let trading_context = TradingContext::from(&cmd_args);
    let request = OrderRequest::from(&cmd_args);

    let log = ActivityLog::open(&cmd_args.log_file)?;
    let result = BinanceFutures::new(trading_context)
        .map_err(OrderError::from)
        .and_then(|exchange| OrderClient::new(exchange, profile, &log).place_order(&request));

    let response = settle(result, log.close())?;
    Ok(report::render(profile, &request, &response))
}

/// The order outcome decides the exit status. A log that fails to flush
/// after the order went through only produces a warning.
fn settle(
    result: Result<OrderResponse, OrderError>,
    closed: std::io::Result<()>,
) -> Result<OrderResponse, OrderError> {
    let response = result?;
    if let Err(e) = closed {
        eprintln!("Warning: {}", OrderError::Log(e));
    }
    Ok(response)
}

fn error_line(profile: OrderProfile, e: &OrderError) -> String {
    match profile {
        OrderProfile::Basic => format!("\nError: {}", e),
        OrderProfile::Advanced => format!("\n❌ Error: {}", e),
    }
}
