use super::*;

#[test]
fn empty_form_reports_both_fields() {
    let form = CropRegionForm::default();
    assert_eq!(form.missing_fields(), vec!["crop", "region"]);
}

#[test]
fn whitespace_counts_as_missing() {
    let form = CropRegionForm {
        crop_name: "  ".to_owned(),
        region: "Punjab".to_owned(),
    };
    assert_eq!(form.missing_fields(), vec!["crop"]);
}

#[test]
fn complete_form_reports_nothing_missing() {
    let form = CropRegionForm {
        crop_name: "Wheat".to_owned(),
        region: "Punjab".to_owned(),
    };
    assert!(form.missing_fields().is_empty());
}

#[test]
fn payload_trims_fields() {
    let form = CropRegionForm {
        crop_name: " Wheat ".to_owned(),
        region: " Punjab ".to_owned(),
    };
    let payload = form.payload();
    assert_eq!(payload.crop_name, "Wheat");
    assert_eq!(payload.region, "Punjab");
}

#[test]
fn reset_clears_fields() {
    let mut form = CropRegionForm {
        crop_name: "Rice".to_owned(),
        region: "Kerala".to_owned(),
    };
    form.reset();
    assert_eq!(form, CropRegionForm::default());
}
