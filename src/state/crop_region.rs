#[cfg(test)]
#[path = "crop_region_test.rs"]
mod crop_region_test;

use crate::net::types::CropRegionPayload;

/// Form model shared by the weather-irrigation and smart-market pages:
/// both endpoints take the same `{crop_name, region}` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CropRegionForm {
    pub crop_name: String,
    pub region: String,
}

impl CropRegionForm {
    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.crop_name.trim().is_empty() {
            missing.push("crop");
        }
        if self.region.trim().is_empty() {
            missing.push("region");
        }
        missing
    }

    /// Snapshot the form into a request payload.
    pub fn payload(&self) -> CropRegionPayload {
        CropRegionPayload {
            crop_name: self.crop_name.trim().to_owned(),
            region: self.region.trim().to_owned(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
