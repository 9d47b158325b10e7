use serde::{Deserialize, Serialize};

pub const NO_TOP_ITEM: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_revenue: f64,
    pub total_items: i64,
    pub avg_confidence: f64,
    pub top_item: String,
}

impl StatsResponse {
    pub fn new(
        total_revenue: f64,
        total_items: i64,
        avg_confidence: f64,
        top_item: Option<String>,
    ) -> Self {
        Self {
            total_revenue,
            total_items,
            avg_confidence,
            top_item: top_item.unwrap_or_else(|| NO_TOP_ITEM.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularItem {
    pub food_name: String,
    pub quantity: i64,
    pub revenue: f64,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub food_name: String,
    pub price: f64,
    pub calories: i64,
    pub confidence: f64,
    /// ISO-8601 local timestamp as stored.
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "admin-dashboard".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
