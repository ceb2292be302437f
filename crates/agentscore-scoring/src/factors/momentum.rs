use agentscore_core::TrustFlowSnapshot;

/// Maximum momentum magnitude at a given confidence.
///
/// `max(floor, cap × confidence)`: illiquid entities only move by the floor.
pub fn bound(confidence: f64, min_floor: f64, max_cap: f64) -> f64 {
    min_floor.max(max_cap * confidence)
}

/// Score adjustment from recent flow.
///
/// `signed_flow / total_units × scale`, clamped to `±bound(confidence)`.
/// No stake or no flow means no momentum.
pub fn calculate(
    flow: Option<&TrustFlowSnapshot>,
    total_units: f64,
    confidence: f64,
    scale: f64,
    min_floor: f64,
    max_cap: f64,
) -> f64 {
    let Some(flow) = flow else {
        return 0.0;
    };
    if total_units.is_nan() || total_units <= 0.0 {
        return 0.0;
    }
    let raw = flow.signed_flow_units() / total_units * scale;
    if !raw.is_finite() {
        return 0.0;
    }
    let limit = bound(confidence, min_floor, max_cap);
    raw.clamp(-limit, limit)
}
