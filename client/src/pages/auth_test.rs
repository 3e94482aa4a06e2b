use super::*;

#[test]
fn heading_follows_mode() {
    assert_eq!(heading(AuthMode::Login).1, "Sign in");
    assert_eq!(heading(AuthMode::Signup).1, "Sign up");
    assert_eq!(heading(AuthMode::Login.toggle()), heading(AuthMode::Signup));
}
