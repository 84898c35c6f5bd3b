use crate::defines::TIME_IN_FORCE_GTC;
use crate::error::{ExchangeError, OrderError};
use crate::exchange::FuturesExchange;
use crate::logging::ActivityLog;
use crate::types::{OrderParams, OrderProfile, OrderRequest, OrderResponse, OrderType};
use crate::util::format_decimal;

/// Translate a request into the exchange's parameter set.
///
/// Symbol, side and type are upper-cased. LIMIT and STOP_LIMIT carry a price
/// and GTC time-in-force, STOP_LIMIT goes out as "STOP" with its stop price.
/// A stop price given for any other type is dropped.
pub fn build_params(profile: OrderProfile, req: &OrderRequest) -> Result<OrderParams, OrderError> {
    if !profile.supports(req.order_type) {
        return Err(OrderError::validation(format!(
            "Order type {} requires --advanced",
            req.order_type
        )));
    }

    let mut params = OrderParams {
        symbol: req.symbol.to_uppercase(),
        side: req.side.api_code().to_string(),
        order_type: req.order_type.api_code().to_string(),
        quantity: format_decimal(req.quantity),
        price: None,
        stop_price: None,
        time_in_force: None,
    };

    match req.order_type {
        OrderType::Market => {}
        OrderType::Limit => {
            let price = req
                .price
                .ok_or_else(|| OrderError::validation("Price is required for limit orders"))?;
            params.price = Some(format_decimal(price));
            params.time_in_force = Some(TIME_IN_FORCE_GTC.to_string());
        }
        OrderType::StopLimit => {
            let (price, stop_price) = req.price.zip(req.stop_price).ok_or_else(|| {
                OrderError::validation("Both price and stop_price are required for stop-limit orders")
            })?;
            params.price = Some(format_decimal(price));
            params.stop_price = Some(format_decimal(stop_price));
            params.time_in_force = Some(TIME_IN_FORCE_GTC.to_string());
        }
    }

    Ok(params)
}

/// Places orders through a `FuturesExchange`, recording every attempt.
pub struct OrderClient<'a, E: FuturesExchange> {
    exchange: E,
    profile: OrderProfile,
    log: &'a ActivityLog,
}

impl<'a, E: FuturesExchange> OrderClient<'a, E> {
    pub fn new(exchange: E, profile: OrderProfile, log: &'a ActivityLog) -> Self {
        Self { exchange, profile, log }
    }

    /// Single best-effort submission, failures are logged once and returned.
    pub fn place_order(&self, req: &OrderRequest) -> Result<OrderResponse, OrderError> {
        let params = build_params(self.profile, req)?;

        let attempt = serde_json::to_string(&params).unwrap_or_else(|_| format!("{:?}", params));
        self.log.info(&format!("Attempting order: {}", attempt));

        let outcome = self.exchange.create_order(&params).and_then(|raw| {
            let response = serde_json::from_value::<OrderResponse>(raw.clone())
                .map_err(|e| ExchangeError::Decode(e.to_string()))?;
            Ok((raw, response))
        });

        match outcome {
            Ok((raw, response)) => {
                self.log.info(&format!("Order successful: {}", raw));
                Ok(response)
            }
            Err(e) => {
                match &e {
                    ExchangeError::Api { status, message, .. } => {
                        self.log.error(&format!("API Error {}: {}", status, message));
                    }
                    other => self.log.error(&format!("Unexpected error: {}", other)),
                }
                Err(e.into())
            }
        }
    }
}
