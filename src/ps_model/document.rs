use std::error::Error;
use std::fmt::Debug;

use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::ps_writer;

const PS_VERSION: &str = "%!PS-Adobe-2.0";
const CREATOR: &str = "psnoodle";

/// One page PostScript program
///
/// every object is stroked on its own line, then the page is shown
pub struct Document {
    title: String,
    date: DateTime<Utc>,
    transform: PageTransform,
    objects: Vec<Box<dyn PsObject>>,
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title)
            .field("date", &self.date)
            .field("transform", &self.transform)
            .field("objects", &self.objects.len())
            .finish()
    }
}

impl Document {
    pub fn new(title: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Document {
            title: ps_writer::dsc_text(title)?,
            date: Utc::now(),
            transform: PageTransform::default(),
            objects: Vec::<Box<dyn PsObject>>::new(),
        })
    }

    pub fn with_transform(mut self, transform: PageTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_date<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.date = date.with_timezone(&Utc);
        self
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn transform(&self) -> &PageTransform {
        &self.transform
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), Box<dyn Error>> {
        self.title = ps_writer::dsc_text(title)?;
        Ok(())
    }

    pub fn add<T: PsObject + 'static>(&mut self, object: T) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// complete PostScript program text
    pub fn to_postscript(&self) -> String {
        log::trace!(
            "render document {:?} with {} objects",
            self.title,
            self.objects.len()
        );
        let mut lines = vec![
            PS_VERSION.to_string(),
            ps_writer::dsc_comment("Title", &self.title),
            ps_writer::dsc_comment("Creator", CREATOR),
            ps_writer::dsc_comment(
                "CreationDate",
                &self.date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            ps_writer::dsc_comment("Pages", "1"),
            "%%EndComments".to_string(),
        ];
        for (idx, object) in self.objects.iter().enumerate() {
            match object.to_ps(&self.transform) {
                Some(ps) => lines.push(format!("{} stroke", ps)),
                None => log::debug!("object {} draws nothing, skipped", idx),
            }
        }
        lines.push("showpage".to_string());
        lines.push("%%EOF".to_string());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
