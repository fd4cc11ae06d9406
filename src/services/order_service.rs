use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::OrderTally;

/// Where the order counters get their numbers
#[async_trait(?Send)]
pub trait OrderTallySource {
    async fn fetch_tally(&self) -> Result<OrderTally, ApiError>;
}

/// Fixed figures shown until the backend exposes order statistics
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderTallies(pub OrderTally);

impl Default for PlaceholderTallies {
    fn default() -> Self {
        Self(OrderTally {
            total: 30,
            cancelled: 30,
            en_route: 12,
        })
    }
}

#[async_trait(?Send)]
impl OrderTallySource for PlaceholderTallies {
    async fn fetch_tally(&self) -> Result<OrderTally, ApiError> {
        Ok(self.0)
    }
}
