use super::*;

fn filled() -> SchemeForm {
    SchemeForm {
        farmer_name: "Ravi Kumar".to_owned(),
        region: "Maharashtra".to_owned(),
        crop: "Cotton".to_owned(),
        farm_size: "5 acres".to_owned(),
        need: "drip irrigation subsidy".to_owned(),
    }
}

#[test]
fn empty_form_reports_all_fields() {
    let form = SchemeForm::default();
    assert_eq!(
        form.missing_fields(),
        vec!["farmer name", "region", "crop", "farm size", "need"]
    );
}

#[test]
fn single_missing_field_is_named() {
    let mut form = filled();
    form.need = String::new();
    assert_eq!(form.missing_fields(), vec!["need"]);
}

#[test]
fn complete_form_reports_nothing_missing() {
    assert!(filled().missing_fields().is_empty());
}

#[test]
fn payload_carries_whole_profile() {
    let payload = filled().payload();
    assert_eq!(payload.farmer_name, "Ravi Kumar");
    assert_eq!(payload.region, "Maharashtra");
    assert_eq!(payload.crop, "Cotton");
    assert_eq!(payload.farm_size, "5 acres");
    assert_eq!(payload.need, "drip irrigation subsidy");
}

#[test]
fn reset_clears_fields() {
    let mut form = filled();
    form.reset();
    assert_eq!(form, SchemeForm::default());
}
