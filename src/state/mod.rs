//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Every tool page runs the same lifecycle: build a payload from its form
//! model, validate, submit, settle. The lifecycle itself lives once in
//! [`submit`]; the per-page modules hold only the form fields, their
//! validation, and payload construction.

pub mod crop_region;
pub mod diagnosis;
pub mod options;
pub mod profit;
pub mod schemes;
pub mod submit;
pub mod ui;
