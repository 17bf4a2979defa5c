//! Numeric helpers shared by the scoring engine and report formatting.

/// Rounds `value` to `decimals` places, resolving exact ties to the even
/// neighbour.
///
/// Decides on the exact stored binary value, not on `value * 10^decimals`,
/// so `4.595` (stored as `4.59499999...`) rounds down to `4.59`. The
/// multiplication error is recovered exactly with a fused multiply-add.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    // value * factor == scaled + residual, exactly.
    let residual = value.mul_add(factor, -scaled);
    let floor = scaled.floor();
    let above_midpoint = ((scaled - floor) - 0.5) + residual;

    let k = if above_midpoint > 0.0 {
        floor + 1.0
    } else if above_midpoint < 0.0 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };

    if k == 0.0 {
        0.0f64.copysign(value)
    } else {
        k / factor
    }
}
