use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use float_cmp::{ApproxEq, F64Margin};

use super::tolerance::nearly_equal;
use crate::ps_writer;

/// immutable 2D point or direction
///
/// equality is tolerance based, components equal within `EPSILON`
#[derive(Default, Debug, Clone, Copy)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn plus(&self, other: &Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(&self, other: &Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product
    pub fn cross(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn scale(&self, k: f64) -> Vector {
        Vector::new(k * self.x, k * self.y)
    }

    pub fn square(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.square().sqrt()
    }

    /// unit vector in the same direction, zero vector gives NaN components
    pub fn normalize(&self) -> Vector {
        self.scale(1.0 / self.length())
    }

    /// "x y", as PostScript operands
    pub fn to_drawing_command(&self) -> String {
        format!(
            "{} {}",
            ps_writer::format_number(self.x),
            ps_writer::format_number(self.y)
        )
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        nearly_equal(self.x, other.x) && nearly_equal(self.y, other.y)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        self.plus(&rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        self.minus(&rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod test_vector {
    use super::*;

    #[test]
    fn test_plus_minus() {
        let p = Vector::new(1.0, 2.0);
        let q = p.plus(&Vector::new(3.0, 5.0));
        assert_eq!(q.x(), 4.0);
        assert_eq!(q.y(), 7.0);
        let q = p.minus(&Vector::new(3.0, 5.0));
        assert_eq!(q.x(), -2.0);
        assert_eq!(q.y(), -3.0);
        // operands untouched
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
    }

    #[test]
    fn test_operators() {
        let a = Vector::new(2.0, 3.0);
        let b = Vector::new(5.0, 7.0);
        assert_eq!(a + b, Vector::new(7.0, 10.0));
        assert_eq!(a - b, Vector::new(-3.0, -4.0));
        assert_eq!(-b, Vector::new(-5.0, -7.0));
        assert_eq!(3.0 * b, Vector::new(15.0, 21.0));
        assert_eq!(a * 4.0, Vector::new(8.0, 12.0));
    }

    #[test]
    fn test_products() {
        let p = Vector::new(1.0, 2.0);
        assert_eq!(p.dot(&Vector::new(3.0, 5.0)), 13.0);
        assert_eq!(Vector::new(2.0, 3.0).dot(&Vector::new(5.0, 7.0)), 31.0);
        assert_eq!(Vector::new(2.0, 3.0).cross(&Vector::new(5.0, 7.0)), -1.0);
        assert_eq!(Vector::new(6.0, 8.0).square(), 100.0);
        assert_eq!(Vector::new(6.0, 8.0).length(), 10.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector::new(6.0, 8.0).normalize();
        assert!(n.approx_eq(Vector::new(0.6, 0.8), F64Margin::default()));
        let z = Vector::new(0.0, 0.0).normalize();
        assert!(z.x().is_nan() && z.y().is_nan());
    }

    #[test]
    fn test_equals() {
        let p = Vector::new(1.0, 2.0);
        assert_eq!(p, p);
        assert_eq!(p, Vector::new(1.0, 2.0));
        assert_eq!(p, Vector::new(1.0000000001, 2.0));
        assert_eq!(p, Vector::new(1.0, 2.0 - 9.0e-9));
        assert_ne!(p, Vector::new(3.0, 5.0));
        assert_ne!(p, Vector::new(4.0, 2.0));
        assert_ne!(p, Vector::new(1.0, 5.0));
        assert_ne!(p, Vector::new(1.0 + 2.0e-8, 2.0));
    }

    #[test]
    fn test_approx_eq_margin() {
        let p = Vector::new(1.0, 2.0);
        let q = Vector::new(1.001, 2.0);
        assert!(p != q);
        assert!(p.approx_eq(q, F64Margin { epsilon: 0.01, ulps: 0 }));
        assert!(!p.approx_eq(q, F64Margin::default()));
    }

    #[test]
    fn test_to_drawing_command() {
        assert_eq!(Vector::new(1.0, 2.0).to_drawing_command(), "1 2");
        assert_eq!(Vector::new(1.5, -3.0).to_drawing_command(), "1.5 -3");
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(2.0, 3.0).to_string(), "(2,3)");
        assert_eq!(Vector::new(-0.5, 7.0).to_string(), "(-0.5,7)");
    }
}
