//! Feedback law.
//!
//! `new = clamp(old + s * rate * (1 - |old - target|), 0, 1)` with
//! `target = 1` for `s > 0`, else `0`. Steps shrink as the weight nears the
//! bound it is being pushed toward.

/// Next weight after one feedback signal. Callers validate `signal` first.
pub fn adapt(old: f64, signal: f64, rate: f64) -> f64 {
    let target = if signal > 0.0 { 1.0 } else { 0.0 };
    let step = signal * rate * (1.0 - (old - target).abs());
    (old + step).clamp(0.0, 1.0)
}
