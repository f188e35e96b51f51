use super::*;

/// Ordered, closeable polyline
///
/// once closed, added points are dropped
#[derive(Default, Debug, Clone)]
pub struct Path {
    pieces: Vec<Vector>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Path {
            pieces: Vec::<Vector>::new(),
            closed: false,
        }
    }

    pub fn add(&mut self, vector: Vector) {
        if self.closed {
            log::debug!("path is closed, drop point {}", vector);
            return;
        }
        self.pieces.push(vector);
    }

    /// close path, can not reopen
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Vector] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// PostScript path construction, `None` for less than 2 points
    ///
    /// `x0 y0 moveto x1 y1 lineto ... [closepath]`
    pub fn to_drawing_command(&self) -> Option<String> {
        self.commands(|p| p.to_drawing_command())
    }

    fn commands<F>(&self, operands: F) -> Option<String>
    where
        F: Fn(&Vector) -> String,
    {
        let (first, rest) = self.pieces.split_first()?;
        if rest.is_empty() {
            return None;
        }
        let mut r = format!("{} moveto", operands(first));
        for piece in rest {
            r.push(' ');
            r.push_str(&operands(piece));
            r.push_str(" lineto");
        }
        if self.closed {
            r.push_str(" closepath");
        }
        Some(r)
    }
}

impl PsObject for Path {
    fn to_ps(&self, tfm: &PageTransform) -> Option<String> {
        self.commands(|p| tfm.format(p))
    }
}
