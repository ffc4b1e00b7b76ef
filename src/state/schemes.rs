#[cfg(test)]
#[path = "schemes_test.rs"]
mod schemes_test;

use crate::net::types::SchemePayload;

/// Farmer profile form for the government scheme page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemeForm {
    pub farmer_name: String,
    pub region: String,
    pub crop: String,
    pub farm_size: String,
    pub need: String,
}

impl SchemeForm {
    /// Names of required fields that are still empty. All five profile
    /// fields are required: the backend matches schemes against the whole
    /// profile.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.farmer_name.trim().is_empty() {
            missing.push("farmer name");
        }
        if self.region.trim().is_empty() {
            missing.push("region");
        }
        if self.crop.trim().is_empty() {
            missing.push("crop");
        }
        if self.farm_size.trim().is_empty() {
            missing.push("farm size");
        }
        if self.need.trim().is_empty() {
            missing.push("need");
        }
        missing
    }

    /// Snapshot the form into a request payload.
    pub fn payload(&self) -> SchemePayload {
        SchemePayload {
            farmer_name: self.farmer_name.trim().to_owned(),
            region: self.region.trim().to_owned(),
            crop: self.crop.trim().to_owned(),
            farm_size: self.farm_size.trim().to_owned(),
            need: self.need.trim().to_owned(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
