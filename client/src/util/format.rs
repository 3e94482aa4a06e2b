//! Display formatting for money and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,800`: whole dollars, rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let whole = amount.abs().round() as u64;
    format!("{sign}${}", group_thousands(whole))
}

/// `$1,200.00`: always two decimals.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn currency_exact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

#[must_use]
pub fn per_month(price: f64) -> String {
    format!("{}/mo", currency(price))
}

/// `Feb 1, 2026` from an ISO date or timestamp. Anything unparseable is
/// returned as given.
#[must_use]
pub fn short_date(raw: &str) -> String {
    parse_ymd(raw.get(..10).unwrap_or(raw)).unwrap_or_else(|| raw.to_owned())
}

fn parse_ymd(date: &str) -> Option<String> {
    let mut parts = date.split('-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;
    (1..=31).contains(&day).then(|| format!("{name} {day}, {year}"))
}
