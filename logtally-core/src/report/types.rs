/// Running totals for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointAggregate {
    pub url: String,
    pub count: u64,
    /// Sum of response times in seconds. Divided only when the row is emitted.
    pub total_time: f64,
}

impl EndpointAggregate {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            count: 0,
            total_time: 0.0,
        }
    }

    pub fn record(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    pub fn average(&self) -> f64 {
        self.total_time / self.count as f64
    }
}

/// One line of the endpoint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub endpoint: String,
    pub total: u64,
    pub avg_response_time: String,
}

impl ReportRow {
    pub fn new(endpoint: impl Into<String>, total: u64, avg_response_time: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            total,
            avg_response_time: avg_response_time.into(),
        }
    }

    /// Cell text in column order.
    pub fn cells(&self) -> [String; 3] {
        [
            self.endpoint.clone(),
            self.total.to_string(),
            self.avg_response_time.clone(),
        ]
    }
}
