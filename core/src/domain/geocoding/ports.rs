use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    geocoding::{entities::GeocodeResult, value_objects::GeocodeMode},
};

/// Port for resolving a human-readable location into coordinates.
///
/// `Ok(None)` means the lookup completed but nothing matched.
#[cfg_attr(test, mockall::automock)]
pub trait GeocoderPort: Send + Sync {
    fn resolve(
        &self,
        query: String,
        mode: GeocodeMode,
    ) -> impl Future<Output = Result<Option<GeocodeResult>, CoreError>> + Send;
}
