/// Rounds `x` to `digits` decimal places, halves away from zero.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let p = 10f64.powi(digits as i32);
    (x * p).round() / p
}
