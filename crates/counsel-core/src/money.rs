//! # Money Formatting
//!
//! Alert prose renders monetary amounts with thousands separators.
//! Amounts stay integers in the smallest currency unit everywhere else.

/// Format an integer amount with comma thousands separators.
///
/// ```
/// use counsel_core::format_thousands;
/// assert_eq!(format_thousands(2_500_000), "2,500,000");
/// ```
pub fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
