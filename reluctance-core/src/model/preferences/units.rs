//! normalization applied to preference values so that equal requests
//! compare (and hash) equal.

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn non_negative(name: &str, value: f64) -> f64 {
    if value < 0.0 {
        log::warn!("negative {name} {value} replaced with 0");
        0.0
    } else {
        value
    }
}

/// m/s. 2 decimals below 10, 1 decimal above.
pub fn speed(value: f64) -> f64 {
    let value = non_negative("speed", value);
    if value < 10.0 {
        round_to(value, 2)
    } else {
        round_to(value, 1)
    }
}

/// reluctances and multiplicative factors.
pub fn reluctance(value: f64) -> f64 {
    let value = non_negative("reluctance", value);
    if value < 2.0 {
        round_to(value, 2)
    } else if value < 10.0 {
        round_to(value, 1)
    } else {
        round_to(value, 0)
    }
}

/// a value in [0, 1].
pub fn ratio(value: f64) -> f64 {
    round_to(value.clamp(0.0, 1.0), 2)
}

pub fn cost(value: i64) -> u32 {
    if value < 0 {
        log::warn!("negative cost {value} replaced with 0");
        return 0;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// meters, e.g. a path width.
pub fn length(value: f64) -> f64 {
    round_to(non_negative("length", value), 2)
}

/// signed percent.
pub fn incline(value: f64) -> f64 {
    round_to(value, 2)
}

/// meters, e.g. a curb height.
pub fn height(value: f64) -> f64 {
    round_to(non_negative("height", value), 3)
}
