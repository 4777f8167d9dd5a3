/// Insert thousands separators into a whole number
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a currency value
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let mut dollars = abs_value.trunc() as u64;
    let mut cents = ((abs_value - abs_value.trunc()) * 100.0).round() as u64;
    if cents == 100 {
        dollars += 1;
        cents = 0;
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{cents:02}", group_thousands(dollars))
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(dollars))
}

/// Format a fraction as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
