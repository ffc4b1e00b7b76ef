use super::*;

fn filled() -> ProfitForm {
    ProfitForm {
        crop: "Wheat".to_owned(),
        region: "Punjab".to_owned(),
        farm_size: "3 acres".to_owned(),
        expected_yield: "20 quintals per acre".to_owned(),
        costs: [
            "1500".to_owned(),
            "2500.50".to_owned(),
            "1000".to_owned(),
            "4000".to_owned(),
            "800".to_owned(),
            String::new(),
            String::new(),
        ],
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_form_reports_required_fields() {
    let form = ProfitForm::default();
    assert_eq!(
        form.missing_fields(),
        vec!["crop", "region", "farm size", "expected yield"]
    );
}

#[test]
fn blank_costs_do_not_block_submission() {
    assert!(filled().missing_fields().is_empty());
}

// =============================================================
// Total cost arithmetic
// =============================================================

#[test]
fn total_cost_sums_parseable_entries() {
    let total = filled().total_cost();
    assert!((total - 9800.5).abs() < f64::EPSILON);
}

#[test]
fn unparseable_cost_counts_as_zero() {
    let mut form = filled();
    form.costs[0] = "about 1500".to_owned();
    let total = form.total_cost();
    assert!((total - 8300.5).abs() < f64::EPSILON);
}

#[test]
fn all_blank_costs_total_zero() {
    let mut form = filled();
    form.costs = Default::default();
    assert!(form.total_cost().abs() < f64::EPSILON);
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_includes_computed_total() {
    let payload = filled().payload();
    assert!((payload.total_cost - 9800.5).abs() < f64::EPSILON);
    assert!((payload.seed_cost - 1500.0).abs() < f64::EPSILON);
    assert!((payload.fertilizer_cost - 2500.5).abs() < f64::EPSILON);
    assert!(payload.other_cost.abs() < f64::EPSILON);
}

#[test]
fn payload_trims_text_fields() {
    let mut form = filled();
    form.crop = " Wheat ".to_owned();
    assert_eq!(form.payload().crop, "Wheat");
}

#[test]
fn cost_labels_match_cost_slots() {
    assert_eq!(COST_LABELS.len(), ProfitForm::default().costs.len());
}

#[test]
fn reset_clears_everything() {
    let mut form = filled();
    form.reset();
    assert_eq!(form, ProfitForm::default());
}
