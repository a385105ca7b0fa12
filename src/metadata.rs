/// The three attributes tallied per file. `None` means the tag was absent,
/// empty, or zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CameraMetadata {
    pub model: Option<String>,
    pub lens_model: Option<String>,
    pub focal_length_35mm: Option<u32>,
}

impl CameraMetadata {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.lens_model.is_none() && self.focal_length_35mm.is_none()
    }
}
