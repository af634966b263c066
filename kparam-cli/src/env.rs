//! Environment variable lookup, kept apart from the registry: a plain
//! process environment query plus a lenient integer conversion.

pub fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Best-effort conversion in the spirit of C's `atoi`: leading whitespace
/// and an optional sign, then as many decimal digits as there are. Yields
/// `0` when no digits are found and saturates instead of overflowing.
pub fn atoi(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

pub fn run(text_var: &str, number_var: &str) {
    match lookup(text_var) {
        Some(value) => println!("{} = {}", text_var, value),
        None => println!("{} not found", text_var),
    }

    match lookup(number_var) {
        Some(value) => println!("{} = {}", number_var, atoi(&value)),
        None => println!("{} not found", number_var),
    }
}
