//! Property-based tests for toctree patching and tag classification.

#[cfg(test)]
mod tests {
    use crate::toctree::{merge_entries, patch_content, Markers, TocEntry};
    use crate::version::{is_standard_release, StandardRelease};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Builds an index page around the given region lines.
    fn page(header: &str, region: &[String], footer: &str) -> String {
        let mut content = format!("{header}\n```{{toctree}}\n:maxdepth: 1\n");
        for line in region {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str("```\n");
        content.push_str(footer);
        content
    }

    fn entry_strategy() -> impl Strategy<Value = TocEntry> {
        ("[A-Z][a-z]{0,6}", "[a-z]{1,6}")
            .prop_map(|(title, target)| TocEntry::new(title, format!("api_docs/{target}.md")))
    }

    proptest! {
        /// Property: every v<int>.<int>.<int> tag is a standard release
        #[test]
        fn numeric_tags_are_standard(major in 0u64..10_000, minor in 0u64..10_000, patch in 0u64..10_000) {
            let tag = format!("v{major}.{minor}.{patch}");
            prop_assert!(is_standard_release(&tag));
            let release = StandardRelease::parse(&tag).unwrap();
            prop_assert_eq!(release.minor_label(), format!("{major}.{minor}"));
        }

        /// Property: any suffix turns a release into a non-standard tag
        #[test]
        fn suffixed_tags_are_not_standard(
            major in 0u64..100,
            minor in 0u64..100,
            patch in 0u64..100,
            suffix in "[-+.a-z][a-z0-9.]{0,8}",
        ) {
            let tag = format!("v{major}.{minor}.{patch}{suffix}");
            prop_assert!(!is_standard_release(&tag));
        }

        /// Property: tags without the leading `v` are rejected
        #[test]
        fn unprefixed_tags_are_not_standard(tag in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}") {
            prop_assert!(!is_standard_release(&tag));
        }

        /// Property: merged lines are unique and keep first-occurrence order
        #[test]
        fn merge_keeps_first_occurrences(
            new in prop::collection::vec("[a-c]", 0..6),
            existing in prop::collection::vec("[a-c]", 0..6),
        ) {
            let existing_refs: Vec<&str> = existing.iter().map(String::as_str).collect();
            let merged = merge_entries(&new, &existing_refs);

            let mut expected = Vec::new();
            let mut seen = HashSet::new();
            for line in new.iter().chain(existing.iter()) {
                if seen.insert(line.as_str()) {
                    expected.push(line.as_str());
                }
            }
            prop_assert_eq!(merged, expected);
        }

        /// Property: patching twice equals patching once
        #[test]
        fn patching_is_idempotent(
            region in prop::collection::vec("[A-Z][a-z]{0,5} <[a-z]{1,5}>", 0..5),
            entries in prop::collection::vec(entry_strategy(), 0..5),
        ) {
            let markers = Markers::default();
            let content = page("# Index", &region, "Footer\n");
            let once = patch_content(&content, &entries, &markers).unwrap();
            let twice = patch_content(&once, &entries, &markers).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: text outside the region is preserved
        #[test]
        fn patching_preserves_header_and_footer(
            header in "[a-zA-Z #]{0,20}",
            footer in "[a-zA-Z ]{0,20}",
            entries in prop::collection::vec(entry_strategy(), 0..5),
        ) {
            let markers = Markers::default();
            let content = page(&header, &[], &footer);
            let patched = patch_content(&content, &entries, &markers).unwrap();

            let header_block = format!("{header}\n```{{toctree}}\n:maxdepth: 1\n");
            let footer_block = format!("```\n{footer}");
            prop_assert!(patched.starts_with(&header_block));
            prop_assert!(patched.ends_with(&footer_block));
            for entry in &entries {
                prop_assert!(patched.contains(&entry.to_line()));
            }
        }
    }
}
