use serde_json::{Value, json};

pub fn request(url: &str, response_time: f64, timestamp: &str) -> Value {
    json!({
        "@timestamp": timestamp,
        "status": 200,
        "url": url,
        "request_method": "GET",
        "response_time": response_time,
        "http_user_agent": "Mozilla/5.0"
    })
}
