//! Display formatting for calculator results.
//! Currency rounds to whole dollars; percentages keep at most one fractional digit.

/// `1234567.4` → `$1,234,567`, `-50.5` → `-$51`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `20.0` → `20%`, `0.75` → `0.8%`.
pub fn format_percent(value: f64) -> String {
    let mut rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        rounded = 0.0; // normalise -0.0
    }
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
