use chrono::{DateTime, Utc};

/// `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole US dollars, e.g. `$45,000,000`
pub fn price(amount: u64) -> String {
    format!("${}", thousands(amount))
}

/// Rounded dollars per square foot; `None` for a zero area
pub fn price_per_sqft(amount: u64, area: u32) -> Option<u64> {
    if area == 0 {
        return None;
    }
    let area = u64::from(area);
    Some((amount + area / 2) / area)
}

/// Inquiry timestamp as shown in the admin list, e.g. `Jan 5, 2025, 03:04 PM`
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(18_500), "18,500");
        assert_eq!(thousands(45_000_000), "45,000,000");
    }

    #[test]
    fn formats_dollars_without_cents() {
        assert_eq!(price(32_000_000), "$32,000,000");
    }

    #[test]
    fn per_sqft_rounds_and_guards_zero() {
        assert_eq!(price_per_sqft(45_000_000, 18_500), Some(2432));
        assert_eq!(price_per_sqft(1, 0), None);
    }

    #[test]
    fn formats_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(timestamp(&at), "Jan 5, 2025, 03:04 PM");
    }
}
