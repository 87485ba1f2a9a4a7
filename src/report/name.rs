//! Wire identifier construction.

/// Join an optional prefix and name components with dots.
///
/// Empty components are never inserted; with no prefix the result is just
/// the joined components. Components pass through verbatim, they originate
/// from metric registration and are assumed already safe.
pub fn metric_name(prefix: Option<&str>, parts: &[&str]) -> String {
    let mut name = String::new();
    if let Some(prefix) = prefix {
        if !prefix.is_empty() {
            name.push_str(prefix);
        }
    }
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(part);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prefix() {
        assert_eq!(metric_name(None, &["jvm", "threads"]), "jvm.threads");
        assert_eq!(metric_name(None, &["requests"]), "requests");
    }

    #[test]
    fn test_with_prefix() {
        assert_eq!(metric_name(Some("host1"), &["requests"]), "host1.requests");
        assert_eq!(
            metric_name(Some("host1"), &["jvm", "threads"]),
            "host1.jvm.threads"
        );
    }

    #[test]
    fn test_empty_components_skipped() {
        assert_eq!(metric_name(Some(""), &["requests"]), "requests");
        assert_eq!(metric_name(None, &["", "requests", ""]), "requests");
        assert_eq!(metric_name(Some("host1"), &[]), "host1");
    }
}
