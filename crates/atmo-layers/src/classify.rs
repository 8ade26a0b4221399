use crate::layer::{Layer, LAYERS};

/// Return the layer containing `altitude_km`, or `None` when the altitude is
/// outside the table (negative, at or above 10 000 km, or NaN).
pub fn classify(altitude_km: f64) -> Option<&'static Layer> {
    if altitude_km < 0.0 {
        return None;
    }
    LAYERS.iter().find(|layer| layer.contains(altitude_km))
}
