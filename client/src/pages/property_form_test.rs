use super::*;

#[test]
fn blank_form_fails_every_required_number() {
    let errors = validate_property(&blank_form()).unwrap_err();
    assert_eq!(errors.get("price"), Some("Price is required"));
    assert_eq!(errors.get("area"), Some("Area is required"));
    assert_eq!(errors.get("bedrooms"), Some("Number of bedrooms is required"));
    assert!(errors.get("status").is_none());
}

#[test]
fn typed_inputs_produce_a_valid_draft() {
    let mut form = blank_form();
    form.description = "Top floor".into();
    for (field, value) in [
        ("name", "Loft"),
        ("address", "1 Pier Rd"),
        ("price", "1800"),
        ("area", "85"),
        ("bedrooms", "2"),
        ("bathrooms", "1"),
        ("amenities", "parking, gym"),
        ("latitude", "37.7"),
        ("longitude", "-122.4"),
    ] {
        set_field_value(&mut form, field, value.to_owned());
        assert_eq!(field_value(&form, field), value);
    }

    let draft = validate_property(&form).unwrap();
    assert_eq!(draft.bedrooms, 2);
    assert_eq!(draft.amenities, vec!["parking", "gym"]);
    assert_eq!(draft.location.lng(), -122.4);
}
