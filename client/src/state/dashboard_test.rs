use super::*;

#[test]
fn tabs_start_on_overview_and_cover_every_section() {
    assert_eq!(LandlordTab::default(), LandlordTab::Overview);
    let labels: Vec<_> = LandlordTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Overview", "Properties", "Requests", "Payments", "Profile"]);
}

#[test]
fn loadable_from_error_keeps_backend_message() {
    let failed: Loadable<Vec<u32>> = Err(ApiError::Status { status: 500, message: "ledger offline".into() }).into();
    assert_eq!(failed.error(), Some("ledger offline"));
    assert!(failed.ready().is_none());
}

#[test]
fn update_ready_ignores_other_states() {
    let mut loading: Loadable<Vec<u32>> = Loadable::Loading;
    loading.update_ready(|v| v.push(1));
    assert!(loading.is_loading());

    let mut ready = Loadable::Ready(vec![1]);
    ready.update_ready(|v| v.push(2));
    assert_eq!(ready.ready(), Some(&vec![1, 2]));
}
