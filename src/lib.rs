//! 2D geometry toolkit with PostScript output
//!
//! Build immutable points with [`vector`], collect them into a [`path`]
//! and serialize to PostScript path construction operators
//!
//! Lines, arcs and shapes in `ps_model` render onto a page through a
//! `PageTransform`, a `Document` wraps them into a one page program

#[macro_use]
pub mod ps_error;
pub mod ps_model;
mod ps_writer;

/// new immutable point
pub fn vector(x: f64, y: f64) -> ps_model::Vector {
    ps_model::Vector::new(x, y)
}

/// new empty, open path
pub fn path() -> ps_model::Path {
    ps_model::Path::new()
}

#[cfg(test)]
mod test_psnoodle {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};

    #[test]
    fn test_vector_algebra() {
        let samples = [
            (1.0, 2.0, 3.0, 5.0),
            (-0.25, 1e6, 7.5, -3.0),
            (0.1, 0.2, 0.3, 0.4),
        ];
        for (a, b, c, d) in samples {
            let (p, q) = (vector(a, b), vector(c, d));
            assert_eq!(p.plus(&q), vector(a + c, b + d));
            assert_eq!(p.minus(&q), vector(a - c, b - d));
            assert!(p.dot(&q).approx_eq(a * c + b * d, F64Margin::default()));
        }
    }

    #[test]
    fn test_equals_tolerance() {
        let p = vector(1.0, 2.0);
        assert!(p == p);
        for delta in [9.9e-9, -9.9e-9, 1e-12] {
            assert!(p == vector(1.0 + delta, 2.0));
            assert!(p == vector(1.0, 2.0 + delta));
        }
        assert!(p != vector(4.0, 2.0));
        assert!(p != vector(1.0, 5.0));
    }

    #[test]
    fn test_path_serialization() {
        let mut q = path();
        assert_eq!(q.to_drawing_command(), None);
        q.add(vector(1.0, 2.0));
        assert_eq!(q.to_drawing_command(), None);
        q.add(vector(3.0, 5.0));
        assert_eq!(q.to_drawing_command().unwrap(), "1 2 moveto 3 5 lineto");

        let mut q = path();
        q.add(vector(1.0, 2.0));
        q.add(vector(3.0, 5.0));
        q.add(vector(3.0, 1.0));
        q.close();
        let closed = q.to_drawing_command();
        assert_eq!(
            closed.as_deref(),
            Some("1 2 moveto 3 5 lineto 3 1 lineto closepath")
        );
        q.add(vector(9.0, 9.0));
        assert_eq!(q.to_drawing_command(), closed);
        assert_eq!(q.to_drawing_command(), q.to_drawing_command());
    }
}
