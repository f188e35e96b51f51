/// a teeny number, floating point is inexact
pub const EPSILON: f64 = 1.0e-8;

pub fn nearly_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

pub fn nearly_equal(a: f64, b: f64) -> bool {
    nearly_zero(a - b)
}
