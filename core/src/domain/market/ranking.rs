use crate::domain::{
    geocoding::entities::Coordinates,
    market::entities::{MarketRecord, RankedMarket},
};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Great-circle distance in kilometers using the haversine formula.
///
/// Returns `f64::INFINITY` when either point is not a finite coordinate, so
/// callers can drop the pair instead of ranking it.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let inputs = [from.latitude, from.longitude, to.latitude, to.longitude];
    if inputs.iter().any(|v| !v.is_finite()) {
        return f64::INFINITY;
    }

    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_KM * c;

    if distance.is_finite() {
        distance
    } else {
        f64::INFINITY
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keeps the markets within `radius_km` of `origin`, nearest first.
///
/// Ties keep catalog order.
pub fn rank_markets(
    origin: Coordinates,
    markets: Vec<MarketRecord>,
    radius_km: f64,
) -> Vec<RankedMarket> {
    let mut ranked: Vec<RankedMarket> = markets
        .into_iter()
        .filter_map(|market| {
            let distance = haversine_km(origin, market.coordinates());
            tracing::trace!(market = %market.name, distance, "computed market distance");

            (distance.is_finite() && distance <= radius_km).then(|| RankedMarket {
                market,
                distance: round_to_hundredths(distance),
            })
        })
        .collect();

    // Every distance left is finite, so total_cmp and partial_cmp agree.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
