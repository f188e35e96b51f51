use super::*;

/// Where two segments meet
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    Point(Vector),
    /// two points, in order along the second operand
    Points(Vec<Vector>),
    /// colinear lines overlapping
    Segment(LineSegment),
    /// concentric arcs of the same radius overlapping
    Arc(Arc),
}

impl Intersection {
    /// all intersection points, empty for overlapping pieces
    pub fn points(&self) -> Vec<Vector> {
        match self {
            Intersection::Point(p) => vec![*p],
            Intersection::Points(pts) => pts.clone(),
            Intersection::Segment(_) | Intersection::Arc(_) => Vec::new(),
        }
    }
}

/// One piece of a shape outline
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(Arc),
}

impl Segment {
    pub fn intersect(&self, other: &Segment) -> Option<Intersection> {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => a.intersect(b),
            (Segment::Line(line), Segment::Arc(arc)) | (Segment::Arc(arc), Segment::Line(line)) => {
                arc.intersect_segment(line)
            }
            (Segment::Arc(a), Segment::Arc(b)) => a.intersect_arc(b),
        }
    }
}

impl From<LineSegment> for Segment {
    fn from(value: LineSegment) -> Self {
        Segment::Line(value)
    }
}

impl From<Arc> for Segment {
    fn from(value: Arc) -> Self {
        Segment::Arc(value)
    }
}

impl PsObject for Segment {
    fn to_ps(&self, tfm: &PageTransform) -> Option<String> {
        match self {
            Segment::Line(line) => line.to_ps(tfm),
            Segment::Arc(arc) => arc.to_ps(tfm),
        }
    }
}
