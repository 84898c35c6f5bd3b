use crate::types::*;
use crate::defines::*;

use std::fmt;

/// Provide default values for `TradingContext`
impl Default for TradingContext {
    fn default() -> TradingContext {
        TradingContext {
            api_key: String::new(),
            api_secret: String::new(),
            use_testnet: true,      // default for safety use testnet
            base_url: None,
            recv_window: DEFAULT_RECV_WINDOW,
        }
    }
}

impl TradingContext {
    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/'),
            None if self.use_testnet => TESTNET_BASE_URL,
            None => MAINNET_BASE_URL,
        }
    }
}

impl From<&CommandlineArgs> for TradingContext {
    fn from(args: &CommandlineArgs) -> TradingContext {
        TradingContext {
            api_key: args.api_key.clone(),
            api_secret: args.api_secret.clone(),
            use_testnet: !args.mainnet,
            base_url: args.base_url.clone(),
            recv_window: args.recv_window,
        }
    }
}

impl From<&CommandlineArgs> for OrderRequest {
    fn from(args: &CommandlineArgs) -> OrderRequest {
        OrderRequest {
            symbol: args.symbol.clone(),
            side: args.side,
            order_type: args.order_type,
            quantity: args.quantity,
            price: args.price,
            stop_price: args.stop_price,
        }
    }
}

impl CommandlineArgs {
    pub fn profile(&self) -> OrderProfile {
        if self.advanced {
            OrderProfile::Advanced
        } else {
            OrderProfile::Basic
        }
    }
}

impl OrderProfile {
    /// Order types this profile accepts.
    pub fn supported_types(&self) -> &'static [OrderType] {
        match self {
            OrderProfile::Basic => &[OrderType::Market, OrderType::Limit],
            OrderProfile::Advanced => &[OrderType::Market, OrderType::Limit, OrderType::StopLimit],
        }
    }

    pub fn supports(&self, order_type: OrderType) -> bool {
        self.supported_types().contains(&order_type)
    }
}

impl Side {
    pub fn api_code(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl OrderType {
    /// Type code as the exchange knows it. Binance futures calls a
    /// stop-limit order simply "STOP".
    pub fn api_code(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLimit => "STOP",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

impl OrderParams {
    /// Parameters in the order they are sent on the wire.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("symbol", self.symbol.as_str()),
            ("side", self.side.as_str()),
            ("type", self.order_type.as_str()),
            ("quantity", self.quantity.as_str()),
        ];
        if let Some(price) = &self.price {
            pairs.push(("price", price.as_str()));
        }
        if let Some(stop_price) = &self.stop_price {
            pairs.push(("stopPrice", stop_price.as_str()));
        }
        if let Some(tif) = &self.time_in_force {
            pairs.push(("timeInForce", tif.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> CommandlineArgs {
        let mut argv = vec!["futures-order", "--api_key", "k", "--api_secret", "s"];
        argv.extend_from_slice(extra);
        CommandlineArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn context_defaults_to_testnet() {
        let ctx = TradingContext::default();
        assert!(ctx.use_testnet);
        assert_eq!(ctx.base_url(), TESTNET_BASE_URL);
        assert_eq!(ctx.recv_window, DEFAULT_RECV_WINDOW);
    }

    #[test]
    fn mainnet_flag_switches_base_url() {
        let args = parse(&["--symbol", "btcusdt", "--side", "BUY", "--type", "MARKET", "--quantity", "1", "--mainnet"]);
        let ctx = TradingContext::from(&args);
        assert!(!ctx.use_testnet);
        assert_eq!(ctx.base_url(), MAINNET_BASE_URL);
    }

    #[test]
    fn explicit_base_url_wins() {
        let ctx = TradingContext {
            base_url: Some("http://127.0.0.1:8080/".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn side_and_type_parse_in_any_case() {
        let args = parse(&["--symbol", "ethusdt", "--side", "sell", "--type", "stop_limit", "--quantity", "2"]);
        assert_eq!(args.side, Side::Sell);
        assert_eq!(args.order_type, OrderType::StopLimit);
    }

    #[test]
    fn unknown_side_is_a_usage_error() {
        let res = CommandlineArgs::try_parse_from([
            "futures-order", "--api_key", "k", "--api_secret", "s",
            "--symbol", "BTCUSDT", "--side", "HOLD", "--type", "MARKET", "--quantity", "1",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn missing_symbol_is_a_usage_error() {
        let res = CommandlineArgs::try_parse_from([
            "futures-order", "--api_key", "k", "--api_secret", "s",
            "--side", "BUY", "--type", "MARKET", "--quantity", "1",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn negative_quantity_reaches_the_validator() {
        let args = parse(&["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "-1"]);
        assert_eq!(args.quantity, -1.0);
    }

    #[test]
    fn profile_follows_advanced_flag() {
        let basic = parse(&["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1"]);
        assert_eq!(basic.profile(), OrderProfile::Basic);
        assert!(!basic.profile().supports(OrderType::StopLimit));

        let advanced = parse(&["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1", "--advanced"]);
        assert_eq!(advanced.profile(), OrderProfile::Advanced);
        assert!(advanced.profile().supports(OrderType::StopLimit));
    }

    #[test]
    fn stop_limit_maps_to_stop() {
        assert_eq!(OrderType::StopLimit.api_code(), "STOP");
        assert_eq!(OrderType::StopLimit.to_string(), "STOP_LIMIT");
    }

    #[test]
    fn params_pairs_skip_absent_fields() {
        let params = OrderParams {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: "MARKET".to_string(),
            quantity: "0.01".to_string(),
            price: None,
            stop_price: None,
            time_in_force: None,
        };
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["symbol", "side", "type", "quantity"]);
    }
}
