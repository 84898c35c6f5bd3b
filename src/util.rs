use ring::hmac;
use std::fmt::Write;

/// Sign `payload` with HMAC-SHA256 using `secret`, hex-encoded as Binance
/// expects it in the `signature` parameter.
pub fn sign(secret: &str, payload: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    let tag = hmac::sign(&key, payload.as_bytes());
    tag.as_ref().iter().fold(String::with_capacity(64), |mut out, b| {
        // writing into a String cannot fail
        let _ = write!(out, "{:02x}", b);
        out
    })
}

/// Textual form of a quantity or price as sent to the exchange.
/// `50000.0` becomes `50000`, `0.01` stays `0.01`.
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

/// Milliseconds since unix epoch.
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
