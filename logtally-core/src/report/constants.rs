pub const AVERAGE_HEADERS: &[&str] = &["handler", "total", "avg_response_time"];

/// Digits after the decimal point in `avg_response_time`.
pub const AVERAGE_PRECISION: usize = 3;
