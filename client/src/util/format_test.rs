use super::*;

#[test]
fn currency_groups_thousands_and_rounds() {
    assert_eq!(currency(0.0), "$0");
    assert_eq!(currency(950.4), "$950");
    assert_eq!(currency(1800.0), "$1,800");
    assert_eq!(currency(1_234_567.0), "$1,234,567");
    assert_eq!(currency(-250.0), "-$250");
}

#[test]
fn currency_exact_keeps_cents() {
    assert_eq!(currency_exact(1200.0), "$1,200.00");
    assert_eq!(currency_exact(12.5), "$12.50");
    assert_eq!(currency_exact(0.05), "$0.05");
}

#[test]
fn per_month_suffix() {
    assert_eq!(per_month(1450.0), "$1,450/mo");
}

#[test]
fn short_date_accepts_dates_and_timestamps() {
    assert_eq!(short_date("2026-02-01"), "Feb 1, 2026");
    assert_eq!(short_date("2025-12-31T23:59:00.000Z"), "Dec 31, 2025");
}

#[test]
fn short_date_passes_through_unknown_input() {
    assert_eq!(short_date(""), "");
    assert_eq!(short_date("yesterday"), "yesterday");
    assert_eq!(short_date("2026-13-01"), "2026-13-01");
}
