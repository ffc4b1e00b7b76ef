#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod diagnosis_test;

/// Metadata of the photo currently chosen on the crop doctor page.
///
/// The `web_sys::File` itself stays in the DOM input element (it isn't
/// `Send`, so it can't live in a plain signal); this mirror of its name and
/// MIME type is what validation and the "selected file" label read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub content_type: String,
}

impl SelectedImage {
    /// Validate the selection before upload. Returns a user-facing message
    /// when the submission should be blocked.
    pub fn validate(&self) -> Option<&'static str> {
        if self.file_name.is_empty() {
            return Some("Please choose a crop photo to upload.");
        }
        if !is_supported_type(&self.content_type) {
            return Some("Only JPEG and PNG images are supported.");
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The backend rejects anything except JPEG and PNG with a 422; checking
/// here turns that into a validation notice instead of a failed request.
pub fn is_supported_type(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/png")
}
