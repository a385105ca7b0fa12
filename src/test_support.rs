//! Builds small JPEG files carrying a real EXIF segment.

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct ExifFixture {
    fields: Vec<Field>,
}

impl ExifFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(self, model: &str) -> Self {
        self.ascii(Tag::Model, model)
    }

    pub fn lens_model(self, lens: &str) -> Self {
        self.ascii(Tag::LensModel, lens)
    }

    pub fn focal_35mm(mut self, focal: u16) -> Self {
        self.fields.push(Field {
            tag: Tag::FocalLengthIn35mmFilm,
            ifd_num: In::PRIMARY,
            value: Value::Short(vec![focal]),
        });
        self
    }

    fn ascii(mut self, tag: Tag, text: &str) -> Self {
        self.fields.push(Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![text.as_bytes().to_vec()]),
        });
        self
    }

    /// SOI, one APP1 "Exif" segment, EOI.
    pub fn to_jpeg(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in &self.fields {
            writer.push_field(field);
        }
        let mut tiff = Cursor::new(Vec::new());
        writer.write(&mut tiff, false).unwrap();
        let tiff = tiff.into_inner();

        let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
        jpeg.extend_from_slice(&segment_len.to_be_bytes());
        jpeg.extend_from_slice(b"Exif\0\0");
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    }
}

pub fn write_jpeg(dir: &Path, name: &str, fixture: &ExifFixture) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, fixture.to_jpeg()).unwrap();
    path
}

pub fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
