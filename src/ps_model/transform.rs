use super::*;

/// PostScript points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// maps model coordinates onto the page
///
/// model unit is `scale` page points, model (0, 0) lands on `origin`.
/// default is 1 inch per unit, origin at center of an 8.5x11 sheet of paper
#[derive(Debug, Clone, Copy)]
pub struct PageTransform {
    scale: f64,
    origin: Vector,
}

impl Default for PageTransform {
    fn default() -> Self {
        PageTransform {
            scale: POINTS_PER_INCH,
            origin: Vector::new(POINTS_PER_INCH * 4.25, POINTS_PER_INCH * 5.5),
        }
    }
}

impl PageTransform {
    pub fn new(scale: f64, origin: Vector) -> Self {
        PageTransform { scale, origin }
    }

    /// keep model coordinates as page coordinates
    pub fn identity() -> Self {
        PageTransform::new(1.0, Vector::default())
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    pub fn origin(&self) -> Vector {
        self.origin
    }

    pub fn scale(&self, distance: f64) -> f64 {
        self.scale * distance
    }

    pub fn map(&self, point: &Vector) -> Vector {
        self.origin + self.scale * *point
    }

    /// page space operands of `point`
    pub fn format(&self, point: &Vector) -> String {
        self.map(point).to_drawing_command()
    }
}

#[cfg(test)]
mod test_transform {
    use super::*;

    #[test]
    fn test_default_page() {
        let tfm = PageTransform::default();
        assert_eq!(tfm.map(&Vector::new(0.0, 0.0)), Vector::new(306.0, 396.0));
        assert_eq!(tfm.format(&Vector::new(1.0, 0.0)), "378 396");
        assert_eq!(tfm.format(&Vector::new(-1.0, -0.5)), "234 360");
        assert_eq!(tfm.scale(2.0), 144.0);
    }

    #[test]
    fn test_identity() {
        let tfm = PageTransform::identity();
        let p = Vector::new(1.5, -3.0);
        assert_eq!(tfm.map(&p), p);
        assert_eq!(tfm.format(&p), "1.5 -3");
        assert_eq!(tfm.scale(4.0), 4.0);
    }

    #[test]
    fn test_custom() {
        let tfm = PageTransform::new(10.0, Vector::new(100.0, 50.0));
        assert_eq!(tfm.scale_factor(), 10.0);
        assert_eq!(tfm.origin(), Vector::new(100.0, 50.0));
        assert_eq!(tfm.format(&Vector::new(2.0, 3.0)), "120 80");
    }
}
