use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Driver, Session};

use super::ApiClient;

pub const DRIVERS_PATH: &str = "/api/drivers";

#[async_trait(?Send)]
pub trait DriverService {
    /// `GET /api/drivers` authorized with the session's bearer token
    async fn fetch_drivers(&self, session: &Session) -> Result<Vec<Driver>, ApiError>;
}

#[async_trait(?Send)]
impl DriverService for ApiClient {
    async fn fetch_drivers(&self, session: &Session) -> Result<Vec<Driver>, ApiError> {
        log::info!("🚚 Fetching drivers...");
        let bearer = session.bearer();
        let drivers = self.get_json::<Vec<Driver>>(DRIVERS_PATH, Some(&bearer)).await?;
        log::info!("✅ {} drivers received", drivers.len());
        Ok(drivers)
    }
}
