use super::*;

#[test]
fn blank_inputs_apply_no_filters() {
    assert_eq!(FilterInputs::default().to_filters(), PropertyFilters::default());
}

#[test]
fn inputs_parse_into_typed_filters() {
    let inputs = FilterInputs {
        status: "rented".into(),
        min_price: " 900 ".into(),
        max_price: "abc".into(),
        bedrooms: "2".into(),
        search: "  loft ".into(),
    };
    let filters = inputs.to_filters();
    assert_eq!(filters.status, Some(PropertyStatus::Occupied));
    assert_eq!(filters.min_price, Some(900.0));
    assert_eq!(filters.max_price, None);
    assert_eq!(filters.bedrooms, Some(2));
    assert_eq!(filters.search.as_deref(), Some("loft"));
}
