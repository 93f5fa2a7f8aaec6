use std::cmp::Ordering;

/// Compare two dotted-numeric version strings.
///
/// A leading "v" is ignored and missing segments count as zero, so
/// "v2.0" equals "2.0.0". Each segment's value is its leading run of digits;
/// a segment without one is zero. Pre-release suffixes are therefore
/// ignored: "1.0.0-beta" equals "1.0.0".
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a: Vec<&str> = strip_prefix(a).split('.').collect();
    let b: Vec<&str> = strip_prefix(b).split('.').collect();

    (0..a.len().max(b.len()))
        .map(|i| {
            let left = a.get(i).map_or(0, |s| segment_value(s));
            let right = b.get(i).map_or(0, |s| segment_value(s));
            left.cmp(&right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn strip_prefix(version: &str) -> &str {
    let version = version.trim();
    version.strip_prefix('v').unwrap_or(version)
}

fn segment_value(segment: &str) -> u64 {
    let digits = segment
        .find(|c: char| !c.is_ascii_digit())
        .map_or(segment, |end| &segment[..end]);

    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.0", "1.10.0", Ordering::Less)] // numeric, not lexicographic
    #[case("v2.0", "2.0.0", Ordering::Equal)]
    #[case("1.0.0", "1.0.1", Ordering::Less)]
    #[case("2.0.0", "1.99.99", Ordering::Greater)]
    #[case("1.0.0", "v1.0.0", Ordering::Equal)]
    #[case("1.0.0-beta", "1.0.0", Ordering::Equal)] // suffix ignored
    #[case("1.x.0", "1.0.0", Ordering::Equal)] // non-numeric segment is zero
    #[case("", "0.0.0", Ordering::Equal)]
    #[case("1.2.3.4", "1.2.3", Ordering::Greater)]
    #[case("10", "9.9.9", Ordering::Greater)]
    fn compare_versions_returns_expected_ordering(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), expected);
    }

    #[rstest]
    #[case("1.2.3", "1.3.0")]
    #[case("v0.9", "0.10")]
    #[case("3.0.0", "3")]
    #[case("1.0.0-rc.1", "1.0.1")]
    fn compare_versions_is_antisymmetric(#[case] a: &str, #[case] b: &str) {
        assert_eq!(compare_versions(a, b), compare_versions(b, a).reverse());
        assert_eq!(compare_versions(a, a), Ordering::Equal);
    }

    #[rstest]
    #[case("42", 42)]
    #[case("3rc1", 3)]
    #[case("beta", 0)]
    #[case("", 0)]
    fn segment_value_reads_leading_digits(#[case] segment: &str, #[case] expected: u64) {
        assert_eq!(segment_value(segment), expected);
    }
}
