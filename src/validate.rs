use crate::error::OrderError;
use crate::types::{CommandlineArgs, OrderType};

/// Zero counts as missing, a limit order at price 0 is never meant.
pub fn is_set(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0)
}

/// Cross-field checks that clap cannot express.
/// Returns the arguments untouched when they describe a well-formed order.
pub fn validate_input(args: CommandlineArgs) -> Result<CommandlineArgs, OrderError> {
    let profile = args.profile();
    if !profile.supports(args.order_type) {
        return Err(OrderError::validation(format!(
            "Order type {} requires --advanced",
            args.order_type
        )));
    }

    match args.order_type {
        OrderType::Limit if !is_set(args.price) => {
            return Err(OrderError::validation("Price is required for limit orders"));
        }
        OrderType::StopLimit if !is_set(args.price) || !is_set(args.stop_price) => {
            return Err(OrderError::validation(
                "Both price and stop_price are required for STOP_LIMIT orders",
            ));
        }
        _ => {}
    }

    // negated so that NaN is rejected as well
    if !(args.quantity > 0.0) || !args.quantity.is_finite() {
        return Err(OrderError::validation("Quantity must be positive"));
    }

    Ok(args)
}
