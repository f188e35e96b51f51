use std::error::Error;

use super::*;

/// Closed outline through a list of points
///
/// segment i joins point i to point i+1, last point joins back to the first
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Shape {
    pub segments: Vec<Segment>,
}

impl Shape {
    /// `radii[i]` is `None` for a straight edge, `Some(r)` for an arc, see `Arc::from_endpoints`
    pub fn new(points: &[Vector], radii: &[Option<f64>]) -> Result<Self, Box<dyn Error>> {
        let n = points.len();
        if radii.len() != n {
            return Err(Box::new(ps_err!(
                ShapeLayout,
                format!("shape has {} points but {} radii", n, radii.len())
            )));
        }
        let mut segments = Vec::<Segment>::with_capacity(n);
        for (i, radius) in radii.iter().enumerate() {
            let (p1, p2) = (points[i], points[(i + 1) % n]);
            segments.push(match radius {
                None => Segment::Line(LineSegment::new(p1, p2)),
                Some(r) => Segment::Arc(Arc::from_endpoints(p1, p2, *r)?),
            });
        }
        Ok(Shape { segments })
    }

    /// straight edges only
    pub fn polygon(points: &[Vector]) -> Self {
        let n = points.len();
        Shape {
            segments: (0..n)
                .map(|i| Segment::Line(LineSegment::new(points[i], points[(i + 1) % n])))
                .collect(),
        }
    }

    /// every point where an edge of this shape meets an edge of `other`
    pub fn intersections(&self, other: &Shape) -> Vec<Intersection> {
        self.segments
            .iter()
            .flat_map(|a| other.segments.iter().filter_map(move |b| a.intersect(b)))
            .collect()
    }
}

impl PsObject for Shape {
    fn to_ps(&self, tfm: &PageTransform) -> Option<String> {
        if self.segments.is_empty() {
            return None;
        }
        let middle = self
            .segments
            .iter()
            .filter_map(|s| s.to_ps(tfm))
            .collect::<Vec<_>>()
            .join(" ");
        Some(middle)
    }
}

/// axis aligned rectangle, `half_width` and `half_height` measured from the center
pub fn rectangle(xcenter: f64, ycenter: f64, half_width: f64, half_height: f64) -> Shape {
    let (x1, x2) = (xcenter - half_width, xcenter + half_width);
    let (y1, y2) = (ycenter - half_height, ycenter + half_height);
    Shape::polygon(&[
        Vector::new(x1, y1),
        Vector::new(x1, y2),
        Vector::new(x2, y2),
        Vector::new(x2, y1),
    ])
}
