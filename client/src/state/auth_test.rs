use super::*;

fn landlord() -> Session {
    Session::new("u-1", "lee@example.com", Role::Landlord, "tok")
}

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
    assert_eq!(state.display_name(), "");
}

#[test]
fn from_session_exposes_identity() {
    let state = AuthState::from_session(Some(landlord()));
    assert!(state.is_authenticated());
    assert!(!state.verifying);
    assert_eq!(state.role(), Some(Role::Landlord));
    assert_eq!(state.display_name(), "lee");
}
