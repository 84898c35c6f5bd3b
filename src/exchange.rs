use isahc::prelude::*;
use isahc::{HttpClient, Request};

use crate::defines::*;
use crate::error::ExchangeError;
use crate::types::{BinanceErrorResponse, OrderParams, TradingContext};
use crate::util::{sign, timestamp_ms};

/// The exchange's "create futures order" operation.
pub trait FuturesExchange {
    /// Submit one order and return the exchange's raw response.
    fn create_order(&self, params: &OrderParams) -> Result<serde_json::Value, ExchangeError>;
}

/// Binance USD-M futures REST client.
pub struct BinanceFutures {
    http: HttpClient,
    ctx: TradingContext,
}

impl BinanceFutures {
    pub fn new(ctx: TradingContext) -> Result<Self, ExchangeError> {
        let http = HttpClient::new().map_err(|e| ExchangeError::Transport(e.to_string()))?;
        Ok(Self { http, ctx })
    }

    /// Form-encoded, signed request body.
    fn signed_body(&self, params: &OrderParams, timestamp: i64) -> String {
        let recv_window = self.ctx.recv_window.to_string();
        let timestamp = timestamp.to_string();

        let mut form = url::form_urlencoded::Serializer::new(String::new());
        form.extend_pairs(params.pairs());
        form.append_pair("recvWindow", &recv_window);
        form.append_pair("timestamp", &timestamp);
        let payload = form.finish();

        let signature = sign(&self.ctx.api_secret, &payload);
        format!("{}&signature={}", payload, signature)
    }
}

impl FuturesExchange for BinanceFutures {
    fn create_order(&self, params: &OrderParams) -> Result<serde_json::Value, ExchangeError> {
        let url = format!("{}{}", self.ctx.base_url(), ORDER_ENDPOINT);
        let body = self.signed_body(params, timestamp_ms());

        let request = Request::post(url)
            .header(API_KEY_HEADER, self.ctx.api_key.as_str())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let mut response = self
            .http
            .send(request)
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<serde_json::Value>()
                .map_err(|e| ExchangeError::Decode(e.to_string()));
        }

        let text = response
            .text()
            .map_err(|e| ExchangeError::Decode(e.to_string()))?;
        Err(match serde_json::from_str::<BinanceErrorResponse>(&text) {
            Ok(err) => ExchangeError::Api {
                status: status.as_u16(),
                code: Some(err.code),
                message: err.msg,
            },
            Err(_) => ExchangeError::Api {
                status: status.as_u16(),
                code: None,
                message: text,
            },
        })
    }
}
