mod angle;
mod arc;
mod document;
mod intersection;
mod path;
mod segment;
mod shape;
mod tolerance;
mod transform;
mod vector;

pub use self::angle::*;
pub use self::arc::*;
pub use self::document::*;
pub use self::intersection::*;
pub use self::path::*;
pub use self::segment::*;
pub use self::shape::*;
pub use self::tolerance::*;
pub use self::transform::*;
pub use self::vector::*;

/// Something that can be drawn as a PostScript path fragment
pub trait PsObject {
    /// path construction operators in page space, `None` if nothing to draw
    fn to_ps(&self, tfm: &PageTransform) -> Option<String>;
}

#[cfg(test)]
mod test_ps_model {
    use super::*;

    #[test]
    fn test_objects_share_transform() {
        let tfm = PageTransform::identity();
        let mut path = Path::new();
        path.add(Vector::new(0.0, 0.0));
        path.add(Vector::new(1.0, 0.0));
        let seg = LineSegment::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        let objects: Vec<Box<dyn PsObject>> = vec![Box::new(path), Box::new(seg)];
        let rendered: Vec<_> = objects.iter().filter_map(|o| o.to_ps(&tfm)).collect();
        assert_eq!(rendered, vec!["0 0 moveto 1 0 lineto", "0 0 moveto 1 0 lineto"]);
    }
}
