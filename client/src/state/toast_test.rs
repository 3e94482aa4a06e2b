use super::*;

#[test]
fn push_is_newest_first_with_unique_ids() {
    let mut toasts = ToastState::default();
    let first = toasts.push(ToastKind::Success, "Property saved");
    let second = toasts.push(ToastKind::Error, "Upload failed");

    assert_ne!(first, second);
    assert_eq!(toasts.items[0].message, "Upload failed");
    assert_eq!(toasts.items[1].kind, ToastKind::Success);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let keep = toasts.push(ToastKind::Success, "a");
    let drop = toasts.push(ToastKind::Success, "b");

    toasts.dismiss(drop);
    toasts.dismiss(drop);

    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, keep);
}
