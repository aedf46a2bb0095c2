//! Tick and nice-bound math shared by the scale types.
//!
//! Linear steps are constrained to 1, 2, 5 multiples of a power of ten so
//! tick values land on visually round numbers; logarithmic ticks walk the
//! base-10 sub-decade ladder.

const SQRT_50: f64 = 7.071_067_811_865_476;
const SQRT_10: f64 = 3.162_277_660_168_379_5;
const SQRT_2: f64 = 1.414_213_562_373_095_1;

/// Widest span, in whole decades, for which the log ladder emits sub-decade
/// multiples. Wider spans fall back to one tick per decade.
pub(crate) const LOG_LADDER_MAX_DECADES: i32 = 12;

const NICE_MAX_PASSES: usize = 10;

/// Returns the tick step for the given bounds and tick count.
///
/// Steps of at least 1 are returned directly. Sub-unit steps are returned as
/// the negated inverse divisor (`-10` means a step of `0.1`) so callers can
/// divide instead of multiplying and keep round decimals exact.
pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -(10_f64.powf(-power)) / factor
    }
}

/// Generates round tick values covering `[start, stop]`, outermost ticks
/// included only when they fall inside the bounds. Direction-preserving.
pub(crate) fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);

    let mut ticks = if step > 0.0 && step.is_finite() {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        let mut out = Vec::with_capacity(n);
        for index in 0..n {
            out.push((first + index as f64) * step);
        }
        out
    } else if step < 0.0 && step.is_finite() {
        let inv = -step;
        let first = (lo * inv).ceil();
        let last = (hi * inv).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        let mut out = Vec::with_capacity(n);
        for index in 0..n {
            out.push((first + index as f64) / inv);
        }
        out
    } else {
        Vec::new()
    };

    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Rounds `start`/`stop` outward to tick-step multiples, iterating until the
/// step stabilizes. Direction-preserving; degenerate bounds pass through.
pub(crate) fn nice_bounds(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }

    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed { (stop, start) } else { (start, stop) };
    let mut prestep = f64::NAN;

    for _ in 0..NICE_MAX_PASSES {
        let step = tick_increment(lo, hi, count);
        if step == prestep || step == 0.0 || !step.is_finite() {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else {
            let inv = -step;
            lo = (lo * inv).floor() / inv;
            hi = (hi * inv).ceil() / inv;
        }
        prestep = step;
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}

/// Rounds positive bounds outward to whole decades. Bounds that are not
/// strictly positive pass through unchanged, matching the undefined region
/// of a base-10 log mapping.
pub(crate) fn nice_log_bounds(start: f64, stop: f64) -> (f64, f64) {
    if !(start > 0.0) || !(stop > 0.0) || !start.is_finite() || !stop.is_finite() {
        return (start, stop);
    }

    let descending = stop < start;
    let (lo, hi) = if descending { (stop, start) } else { (start, stop) };
    let lo = 10_f64.powf(lo.log10().floor());
    let hi = 10_f64.powf(hi.log10().ceil());

    if descending { (hi, lo) } else { (lo, hi) }
}

/// Generates the base-10 ladder `k * 10^i` (`k` in `1..=9`) clamped to the
/// bounds, one tick per decade past [`LOG_LADDER_MAX_DECADES`].
/// Direction-preserving; non-positive bounds yield no ticks.
pub(crate) fn log_ladder_ticks(start: f64, stop: f64) -> Vec<f64> {
    if !(start > 0.0) || !(stop > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }

    let descending = stop < start;
    let (min, max) = if descending { (stop, start) } else { (start, stop) };
    let lo_exp = min.log10().floor() as i32;
    let hi_exp = max.log10().ceil() as i32;

    let mut ticks = Vec::new();
    if hi_exp - lo_exp > LOG_LADDER_MAX_DECADES {
        for exp in lo_exp..=hi_exp {
            let decade = 10_f64.powi(exp);
            if decade >= min && decade <= max {
                ticks.push(decade);
            }
        }
    } else {
        for exp in lo_exp..=hi_exp {
            let decade = 10_f64.powi(exp);
            for multiplier in 1..10 {
                let candidate = decade * f64::from(multiplier);
                if candidate >= min && candidate <= max {
                    ticks.push(candidate);
                }
            }
        }
    }

    if descending {
        ticks.reverse();
    }
    ticks
}
