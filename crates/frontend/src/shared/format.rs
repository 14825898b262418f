//! Number formatting helpers, Indonesian locale conventions

/// Group digits with dots the way id-ID renders numbers
/// Example: 1500000 -> "1.500.000"
pub fn format_number_id(value: i64) -> String {
    let digits = value.unsigned_abs().to_string().into_bytes();
    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, b) in digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(b'.');
        }
        grouped.push(*b);
    }
    if value < 0 {
        grouped.push(b'-');
    }
    grouped.reverse();
    String::from_utf8(grouped).unwrap_or_default()
}

/// Format an amount in rupiah without decimals
/// Example: 250000 -> "Rp 250.000"
pub fn format_rupiah(value: i64) -> String {
    format!("Rp {}", format_number_id(value))
}
