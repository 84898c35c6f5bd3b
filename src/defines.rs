/// Base URL of Binance USD-M futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Base URL of Binance USD-M futures (real funds)
pub const MAINNET_BASE_URL: &str = "https://fapi.binance.com";

/// Order creation endpoint
pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Default validity window (ms) of a signed request
pub const DEFAULT_RECV_WINDOW: u64 = 5000;

/// Time-in-force used whenever a price is attached to the order
pub const TIME_IN_FORCE_GTC: &str = "GTC";

/// Activity log written next to where the tool is run
pub const LOG_FILE: &str = "bot_activity.log";
