use super::*;

#[test]
fn option_lists_are_populated() {
    assert!(!CROPS.is_empty());
    assert!(!REGIONS.is_empty());
}

#[test]
fn option_lists_have_no_duplicates() {
    let mut crops: Vec<_> = CROPS.to_vec();
    crops.sort_unstable();
    crops.dedup();
    assert_eq!(crops.len(), CROPS.len());

    let mut regions: Vec<_> = REGIONS.to_vec();
    regions.sort_unstable();
    regions.dedup();
    assert_eq!(regions.len(), REGIONS.len());
}
