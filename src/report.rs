use crate::types::{OrderProfile, OrderRequest, OrderResponse};
use crate::validate::is_set;

const NOT_AVAILABLE: &str = "N/A";

/// Console summary of an executed order.
/// Price and stop price lines appear only when they were part of the request
/// with a non-zero value.
pub fn render(profile: OrderProfile, req: &OrderRequest, resp: &OrderResponse) -> String {
    match profile {
        OrderProfile::Basic => render_basic(req, resp),
        OrderProfile::Advanced => render_advanced(req, resp),
    }
}

fn render_basic(req: &OrderRequest, resp: &OrderResponse) -> String {
    let mut lines = vec![
        String::new(),
        "Order Execution Details:".to_string(),
        format!("ID: {}", resp.order_id),
        format!("Status: {}", resp.status),
        format!("Symbol: {}", resp.symbol),
        format!("Side: {}", resp.side),
        format!("Type: {}", resp.order_type),
        format!("Quantity: {}", resp.orig_qty),
    ];
    if is_set(req.price) {
        lines.push(format!("Price: {}", or_na(&resp.price)));
    }
    lines.push(format!("Executed Qty: {}", resp.executed_qty));
    lines.join("\n")
}

fn render_advanced(req: &OrderRequest, resp: &OrderResponse) -> String {
    let mut lines = vec![
        String::new(),
        "🚀 Order Execution Details:".to_string(),
        format!("🔑 ID: {}", resp.order_id),
        format!("📊 Status: {}", resp.status),
        format!("🏷  Symbol: {}", resp.symbol),
        format!("📈 Side: {}", resp.side),
        format!("🔧 Type: {} (API Type: {})", req.order_type, resp.order_type),
        format!("📦 Quantity: {}", resp.orig_qty),
    ];
    if is_set(req.price) {
        lines.push(format!("💰 Price: {}", or_na(&resp.price)));
    }
    if is_set(req.stop_price) {
        lines.push(format!("🛑 Stop Price: {}", or_na(&resp.stop_price)));
    }
    lines.push(format!("✅ Executed Qty: {}", resp.executed_qty));
    lines.push(format!("📝 Client Order ID: {}", or_na(&resp.client_order_id)));
    lines.join("\n")
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderType, Side};

    fn response() -> OrderResponse {
        OrderResponse {
            order_id: 4021,
            status: "NEW".to_string(),
            symbol: "BTCUSDT".to_string(),
            side: "SELL".to_string(),
            order_type: "STOP".to_string(),
            orig_qty: "0.010".to_string(),
            executed_qty: "0".to_string(),
            price: Some("49000".to_string()),
            stop_price: None,
            client_order_id: None,
        }
    }

    fn request(order_type: OrderType, price: Option<f64>, stop_price: Option<f64>) -> OrderRequest {
        OrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: Side::Sell,
            order_type,
            quantity: 0.01,
            price,
            stop_price,
        }
    }

    #[test]
    fn basic_market_summary_has_no_price() {
        let out = render(OrderProfile::Basic, &request(OrderType::Market, None, None), &response());
        assert_eq!(
            out,
            "\nOrder Execution Details:\nID: 4021\nStatus: NEW\nSymbol: BTCUSDT\nSide: SELL\nType: STOP\nQuantity: 0.010\nExecuted Qty: 0"
        );
    }

    #[test]
    fn basic_limit_summary_shows_price() {
        let out = render(OrderProfile::Basic, &request(OrderType::Limit, Some(49000.0), None), &response());
        assert!(out.contains("\nPrice: 49000\nExecuted Qty: 0"));
    }

    #[test]
    fn advanced_summary_marks_missing_fields() {
        let out = render(
            OrderProfile::Advanced,
            &request(OrderType::StopLimit, Some(49000.0), Some(49500.0)),
            &response(),
        );
        assert!(out.contains("🔧 Type: STOP_LIMIT (API Type: STOP)"));
        assert!(out.contains("💰 Price: 49000"));
        assert!(out.contains("🛑 Stop Price: N/A"));
        assert!(out.ends_with("📝 Client Order ID: N/A"));
    }

    #[test]
    fn advanced_summary_omits_unrequested_prices() {
        let out = render(OrderProfile::Advanced, &request(OrderType::Market, None, None), &response());
        assert!(!out.contains("Price"));
    }

    #[test]
    fn zero_prices_are_not_printed() {
        let req = request(OrderType::Market, Some(0.0), Some(0.0));
        let basic = render(OrderProfile::Basic, &req, &response());
        assert!(basic.ends_with("Quantity: 0.010\nExecuted Qty: 0"));
        let advanced = render(OrderProfile::Advanced, &req, &response());
        assert!(!advanced.contains("Price"));
    }
}
