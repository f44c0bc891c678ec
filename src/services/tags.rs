/// Canonical version string for a release tag.
///
/// Trims, then strips one leading `version/`, then one leading `v`.
/// An empty result means the tag is unusable.
pub fn normalize_tag(tag: &str) -> &str {
    let tag = tag.trim();
    let tag = tag.strip_prefix("version/").unwrap_or(tag);
    tag.strip_prefix('v').unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::normalize_tag;

    #[test]
    fn strips_known_prefixes() {
        assert_eq!(normalize_tag("version/v1.2.3"), "1.2.3");
        assert_eq!(normalize_tag("version/2024.2.1"), "2024.2.1");
        assert_eq!(normalize_tag("v1.2.3"), "1.2.3");
        assert_eq!(normalize_tag("1.2.3"), "1.2.3");
        assert_eq!(normalize_tag("  v2.0  "), "2.0");
    }

    #[test]
    fn strips_at_most_one_of_each_prefix() {
        assert_eq!(normalize_tag("vv1.0"), "v1.0");
        assert_eq!(normalize_tag("version/version/1.0"), "version/1.0");
        assert_eq!(normalize_tag("v/version/1.0"), "/version/1.0");
    }

    #[test]
    fn does_not_case_fold() {
        assert_eq!(normalize_tag("V1.0"), "V1.0");
        assert_eq!(normalize_tag("Version/1.0"), "Version/1.0");
    }

    #[test]
    fn blank_tags_normalize_to_empty() {
        assert_eq!(normalize_tag(""), "");
        assert_eq!(normalize_tag("   "), "");
        assert_eq!(normalize_tag("v"), "");
        assert_eq!(normalize_tag("version/"), "");
    }

    #[test]
    fn normalization_is_idempotent_for_typical_tags() {
        for raw in ["version/v1.2.3", "v2024.8.0", "2023.10.4", " v0.1-rc1 "] {
            let once = normalize_tag(raw);
            assert_eq!(normalize_tag(once), once, "raw tag {raw:?}");
        }
    }
}
