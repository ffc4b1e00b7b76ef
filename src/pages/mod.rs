//! Tool pages. Each page is an independent instance of the same pattern:
//! form → validate → submit → render the stored outcome.

pub mod crop_doctor;
pub mod home;
pub mod market;
pub mod profit;
pub mod schemes;
pub mod weather;
