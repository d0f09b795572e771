//! Shared numeric building blocks used across the chemistry systems.
//!
//! Every formula here is zero-guarded: dividing by a quantity that can
//! legitimately be zero (water volume, capacity, growth-rate sum) returns a
//! neutral result instead of NaN or infinity.

/// Q10 temperature scaling: the rate multiplier for a biological or chemical
/// process at `temp_c`, relative to its base rate at `ref_temp_c`.
///
/// A `q10` of 2.0 doubles the rate for every 10 degrees above the reference
/// and halves it for every 10 degrees below.
pub fn q10_factor(temp_c: f64, ref_temp_c: f64, q10: f64) -> f64 {
    q10.powf((temp_c - ref_temp_c) / 10.0)
}

/// One exponential-approach step: move `current` toward `target` by
/// `rate` (fraction of the remaining gap per step). Returns the delta,
/// not the new value.
pub fn approach_delta(current: f64, target: f64, rate: f64) -> f64 {
    (target - current) * rate
}

/// Liebig's law of the minimum over a set of sufficiency factors.
/// Growth is gated by the scarcest input, not the average.
/// An empty slice means nothing is limiting.
pub fn liebig(factors: &[f64]) -> f64 {
    factors.iter().copied().fold(1.0, f64::min)
}

/// Sufficiency of a level against an optimum: 1.0 at or above the optimum,
/// proportionally less below it. Zero optimum means never limiting.
pub fn sufficiency(level: f64, optimal: f64) -> f64 {
    if optimal <= 0.0 {
        1.0
    } else {
        (level / optimal).min(1.0)
    }
}

/// Ratio with a zero-guard: `numerator / denominator`, or 0.0 when the
/// denominator is not positive.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Diminishing-returns pull for stacked identical items: `1 - factor^count`.
/// The first item contributes the most; each further item adds less.
pub fn diminishing_pull(factor: f64, count: u32) -> f64 {
    1.0 - factor.powi(count as i32)
}

/// Volume-weighted temperature blend of two bodies of water.
/// Mixing `v1` liters at `t1` with `v2` liters at `t2`.
/// Both volumes zero yields `t1` (nothing to blend).
pub fn blend(v1: f64, t1: f64, v2: f64, t2: f64) -> f64 {
    let total = v1 + v2;
    if total <= 0.0 {
        t1
    } else {
        (t1 * v1 + t2 * v2) / total
    }
}

/// Derived ppm of a mass-based resource: `mass_mg / volume_l`, or 0.0 when
/// the tank is effectively empty.
pub fn ppm(mass_mg: f64, volume_l: f64) -> f64 {
    safe_ratio(mass_mg, volume_l)
}
