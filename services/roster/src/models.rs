use serde::Deserialize;

/// Body of join and rate-change requests
#[derive(Debug, Clone, Deserialize)]
pub struct RateRequest {
    pub token: String,
    pub rate: i64,
}

/// Body of leave requests
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveRequest {
    pub token: String,
}
