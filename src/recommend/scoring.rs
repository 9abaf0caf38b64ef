/// Distance-to-similarity transform: `max(0, 1 - d)` clamped to [0,1] and
/// rounded to 4 decimal places, so 1.0 reads as a perfect match. Assumes the
/// configured metric keeps typical distances near [0,1].
pub fn similarity_score(distance: f64) -> f64 {
    round4((1.0 - distance).clamp(0.0, 1.0))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
