use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::CatalogHealthStatus};

pub trait HealthCheckService: Send + Sync {
    /// Liveness probe; returns the current unix time in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Readiness probe; the service is ready once the catalog loads at least one market.
    fn readiness(&self) -> impl Future<Output = Result<CatalogHealthStatus, CoreError>> + Send;
}
