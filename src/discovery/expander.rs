use crate::core::constants::instances;

/// Generate the sibling URLs for every URL carrying the instance token.
///
/// Only the additional URLs are returned; see [`build_probe_set`] for the
/// full list. Siblings come out grouped per source URL, in input order,
/// numbered `01` through `08`. The `01` sibling duplicates its source.
pub fn expand(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(String::as_str)
        .filter(|url| url.contains(instances::TOKEN))
        .flat_map(variants)
        .collect()
}

/// The original URLs followed by all generated siblings.
pub fn build_probe_set(urls: &[String]) -> Vec<String> {
    let siblings = expand(urls);
    let mut probe_set = Vec::with_capacity(urls.len() + siblings.len());
    probe_set.extend_from_slice(urls);
    probe_set.extend(siblings);
    probe_set
}

/// All numbered siblings of `url`, or nothing when it has no token.
pub fn variants(url: &str) -> Vec<String> {
    if !url.contains(instances::TOKEN) {
        return Vec::new();
    }

    (1..=instances::VARIANT_COUNT)
        .map(|instance| replace_first(url, instances::TOKEN, &format!("{instance:02}")))
        .collect()
}

/// Replace only the first occurrence of `token`.
///
/// Later occurrences (ports, path segments) are left alone.
pub fn replace_first(haystack: &str, token: &str, replacement: &str) -> String {
    haystack.replacen(token, replacement, 1)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expand__single_instance_family() {
        let actual = expand(&strings(&["https://svc01.example.com"]));

        assert_eq!(
            actual,
            strings(&[
                "https://svc01.example.com",
                "https://svc02.example.com",
                "https://svc03.example.com",
                "https://svc04.example.com",
                "https://svc05.example.com",
                "https://svc06.example.com",
                "https://svc07.example.com",
                "https://svc08.example.com",
            ])
        );
    }

    #[test]
    fn test_expand__when_no_token__contributes_nothing() {
        assert!(expand(&strings(&["https://example.com", "https://svc02.io"])).is_empty());
        assert!(expand(&[]).is_empty());
    }

    #[test]
    fn test_expand__groups_by_source_in_order() {
        let actual = expand(&strings(&[
            "https://a01.com",
            "https://plain.com",
            "https://b01.com",
        ]));

        assert_eq!(actual.len(), 16);
        assert!(actual[..8].iter().all(|u| u.starts_with("https://a0")));
        assert!(actual[8..].iter().all(|u| u.starts_with("https://b0")));
        assert_eq!(actual[7], "https://a08.com");
        assert_eq!(actual[8], "https://b01.com");
    }

    #[test]
    fn test_expand__replaces_first_occurrence_only() {
        let actual = expand(&strings(&["https://a01.b01.com"]));

        assert_eq!(actual[2], "https://a03.b01.com");
        assert!(actual.iter().all(|u| u.ends_with(".b01.com")));
    }

    #[test]
    fn test_expand__token_inside_longer_number() {
        // "2019" does not contain "01", but "2010" does
        assert!(expand(&strings(&["https://y2019.example.com"])).is_empty());
        assert_eq!(
            expand(&strings(&["https://y2010.example.com"]))[4],
            "https://y2050.example.com"
        );
    }

    #[test]
    fn test_build_probe_set__originals_then_siblings() {
        let urls = strings(&["https://svc01.example.com", "https://example.com"]);
        let actual = build_probe_set(&urls);

        assert_eq!(actual.len(), 2 + 8);
        assert_eq!(actual[..2], urls[..]);
        assert_eq!(actual[2], "https://svc01.example.com");
        assert_eq!(actual[9], "https://svc08.example.com");
    }

    #[test]
    fn test_variants__when_no_token__is_empty() {
        assert!(variants("https://example.com").is_empty());
    }

    #[test]
    fn test_replace_first() {
        assert_eq!(replace_first("0101", "01", "07"), "0701");
        assert_eq!(replace_first("abc", "01", "07"), "abc");
    }
}
