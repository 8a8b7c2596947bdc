use super::*;

fn two_section_manifest() -> SizeManifest {
    SizeManifest::from_sections(vec![
        vec![Size::new(100.0, 50.0), Size::new(200.0, 100.0)],
        vec![Size::new(30.0, 40.0)],
    ])
}

#[test]
fn counts_and_sizes_follow_insertion_order() {
    let m = two_section_manifest();
    assert_eq!(m.section_count(), 2);
    assert_eq!(m.item_count(0), 2);
    assert_eq!(m.item_count(1), 1);
    assert_eq!(m.total_items(), 3);
    assert_eq!(m.item_size(ItemKey::new(0, 1)), Size::new(200.0, 100.0));
    assert_eq!(m.item_size(ItemKey::new(1, 0)), Size::new(30.0, 40.0));
}

#[test]
fn out_of_range_lookups_degrade_to_zero() {
    let m = two_section_manifest();
    assert_eq!(m.item_count(7), 0);
    assert_eq!(m.item_size(ItemKey::new(0, 9)), Size::ZERO);
    assert_eq!(m.item_size(ItemKey::new(5, 0)), Size::ZERO);
}

#[test]
fn json_round_trip_preserves_sections() {
    let m = two_section_manifest();
    let json = m.to_json_string().unwrap();
    let back = SizeManifest::from_json_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn invalid_json_maps_to_serde_error() {
    let err = SizeManifest::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn references_forward_the_source_impl() {
    let m = two_section_manifest();
    fn totals(source: &impl ItemSource) -> usize {
        (0..source.section_count())
            .map(|s| source.item_count(s))
            .sum()
    }
    assert_eq!(totals(&&m), 3);
}

#[test]
fn single_section_and_push_build_up() {
    let mut m = SizeManifest::single_section(vec![Size::new(1.0, 1.0)]);
    m.push_section(vec![Size::new(2.0, 2.0), Size::new(3.0, 3.0)]);
    assert_eq!(m.section_count(), 2);
    assert_eq!(m.total_items(), 3);
}
