//! Shared helpers.

pub mod path;

/// Format a count with its noun, pluralized with a trailing `s`.
///
/// `plural_count(1, "rule")` → `"1 rule"`, `plural_count(3, "rule")` → `"3 rules"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "resource"), "0 resources");
        assert_eq!(plural_count(1, "resource"), "1 resource");
        assert_eq!(plural_count(12, "rule"), "12 rules");
    }
}
