use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProduceNearbyParams {
    /// Free-text place name or a 5-digit US ZIP code.
    #[param(example = "60614")]
    pub location: Option<String>,
}
