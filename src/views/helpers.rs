/// Formats a price as Brazilian currency, e.g. `10` -> `R$ 10,00`.
/// Non-finite values are spelled out (`R$ Infinity`, `R$ NaN`).
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "R$ NaN".to_string();
    }
    if price.is_infinite() {
        let sign = if price < 0.0 { "-" } else { "" };
        return format!("R$ {}Infinity", sign);
    }
    format!("R$ {:.2}", price).replace('.', ",")
}

pub fn eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
