use clap::{ArgEnum, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name="futures-order")]
#[clap(about="futures-order places a single order on Binance USD-M futures (testnet by default)", long_about=None)]
pub struct CommandlineArgs {
    /// API key
    #[clap(long="api_key", env="BINANCE_API_KEY", hide_env_values=true)]
    pub api_key: String,

    /// API secret
    #[clap(long="api_secret", env="BINANCE_API_SECRET", hide_env_values=true)]
    pub api_secret: String,

    /// Trading pair (e.g., BTCUSDT)
    #[clap(long)]
    pub symbol: String,

    /// Order side
    #[clap(long, arg_enum, ignore_case=true)]
    pub side: Side,

    /// Order type. STOP_LIMIT requires --advanced.
    #[clap(long="type", arg_enum, ignore_case=true)]
    pub order_type: OrderType,

    /// Order quantity
    // hyphen values are let through so that the validator reports negative
    // quantities instead of clap rejecting them as unknown flags
    #[clap(long, allow_hyphen_values=true)]
    pub quantity: f64,

    /// Limit price (required for LIMIT and STOP_LIMIT orders)
    #[clap(long, allow_hyphen_values=true)]
    pub price: Option<f64>,

    /// Stop price (required for STOP_LIMIT)
    #[clap(long="stop_price", allow_hyphen_values=true)]
    pub stop_price: Option<f64>,

    /// Enable advanced order types and detailed output
    #[clap(long)]
    pub advanced: bool,

    /// Execute against the real exchange instead of testnet
    #[clap(long)]
    pub mainnet: bool,

    /// Validity window in milliseconds of the signed request
    #[clap(long="recv_window", default_value_t=crate::defines::DEFAULT_RECV_WINDOW)]
    pub recv_window: u64,

    /// File the activity log is appended to
    #[clap(long="log_file", parse(from_os_str), default_value=crate::defines::LOG_FILE)]
    pub log_file: PathBuf,

    /// Override of the exchange base URL
    #[clap(long="base_url", env="FUTURES_BASE_URL", hide=true)]
    pub base_url: Option<String>,
}

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    #[clap(name="BUY")]
    Buy,
    #[clap(name="SELL")]
    Sell,
}

/// Order types as the user names them.
/// See `OrderType::api_code()` for what the exchange receives.
#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    #[clap(name="MARKET")]
    Market,
    #[clap(name="LIMIT")]
    Limit,
    #[clap(name="STOP_LIMIT")]
    StopLimit,
}

/// Which order types are accepted, and how results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderProfile {
    /// MARKET and LIMIT, plain output
    Basic,
    /// MARKET, LIMIT and STOP_LIMIT, detailed output
    Advanced,
}

/// `TradingContext` contains what is needed to talk to the exchange.
#[derive(Debug, Clone)]
pub struct TradingContext {
    /// Set via --api_key or environment variable BINANCE_API_KEY
    pub api_key: String,

    /// Set via --api_secret or environment variable BINANCE_API_SECRET
    pub api_secret: String,

    /// Whether or not to execute API against testnet
    pub use_testnet: bool,

    /// Explicit base URL, takes precedence over `use_testnet`
    pub base_url: Option<String>,

    /// Validity window (ms) sent along with every signed request
    pub recv_window: u64,
}

/// Validated order as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: f64,
    pub price: Option<f64>,
    pub stop_price: Option<f64>,
}

/// Parameter set of the exchange's "create futures order" call.
/// Numbers are kept in their already-formatted textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    pub symbol: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

/// Order response from Binance.
/// Only the fields that get printed are read, anything else is ignored.
// https://binance-docs.github.io/apidocs/futures/en/#new-order-trade
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: u64,
    pub status: String,
    pub symbol: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub orig_qty: String,
    pub executed_qty: String,
    pub price: Option<String>,
    pub stop_price: Option<String>,
    pub client_order_id: Option<String>,
}

/// Error body returned by Binance on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}
