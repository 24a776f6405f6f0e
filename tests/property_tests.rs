//! Property-based tests for urlprobe using proptest
//!
//! These tests generate random inputs to check the loader, expander and
//! report rendering hold their shape across a wide range of inputs.

use proptest::prelude::*;
use urlprobe::{
    Delimiter, ProbeOutcome, ProbeStatus, build_probe_set, expand, load, render, render_errors_only,
};

/// Generate raw input lines, some of which should survive loading
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Bare hosts
        prop::collection::vec("[a-z]{2,8}", 1..4).prop_map(|parts| parts.join(".")),
        // Hosts with a scheme already
        "[a-z]{3,8}".prop_map(|host| format!("https://{host}.com")),
        // Instance hosts
        ("[a-z]{2,6}", "[a-z]{2,6}").prop_map(|(a, b)| format!("{a}01.{b}.net")),
        // Padding and junk
        "[a-z]{1,10}",
        " {0,3}[a-z]{2,6}\\.[a-z]{2,3} {0,3}",
        Just(String::new()),
        Just("   ".to_string()),
        Just("http://plain.example".to_string()),
    ]
}

fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "https://[a-z]{3,8}\\.[a-z]{2,3}",
        "https://[a-z]{2,5}01\\.[a-z]{2,5}\\.com",
        "https://[a-z]{3,8}\\.com/[a-z0-9]{0,6}",
    ]
}

fn status_strategy() -> impl Strategy<Value = ProbeStatus> {
    prop_oneof![
        Just(ProbeStatus::Ok),
        Just(ProbeStatus::Error),
        Just(ProbeStatus::Unknown),
    ]
}

proptest! {
    #[test]
    fn test_load_yields_https_urls_with_a_dot(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let raw = lines.join("\n");
        let loaded = load(&raw);

        prop_assert!(loaded.len() <= lines.len());
        for url in &loaded {
            prop_assert!(url.starts_with("https://"));
            prop_assert!(url.contains('.'));
            prop_assert_eq!(url.trim(), url.as_str());
        }
    }

    #[test]
    fn test_load_is_stable_on_its_own_output(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let once = load(&lines.join("\n"));
        let twice = load(&once.join("\n"));

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_expand_yields_eight_per_instance_url(urls in prop::collection::vec(url_strategy(), 0..15)) {
        let eligible = urls.iter().filter(|url| url.contains("01")).count();
        let expanded = expand(&urls);

        prop_assert_eq!(expanded.len(), eligible * 8);
        for chunk in expanded.chunks(8) {
            for (i, url) in chunk.iter().enumerate() {
                let instance = format!("{:02}", i + 1);
                prop_assert!(url.contains(&instance));
            }
        }
    }

    #[test]
    fn test_probe_set_keeps_originals_first(urls in prop::collection::vec(url_strategy(), 0..15)) {
        let set = build_probe_set(&urls);

        prop_assert_eq!(&set[..urls.len()], urls.as_slice());
        prop_assert_eq!(set.len(), urls.len() + expand(&urls).len());
    }

    #[test]
    fn test_render_has_one_row_per_outcome(
        rows in prop::collection::vec((url_strategy(), status_strategy()), 0..20),
        csv in any::<bool>(),
    ) {
        let outcomes: Vec<ProbeOutcome> = rows
            .iter()
            .map(|(url, status)| ProbeOutcome::new(url.clone(), *status))
            .collect();
        let delimiter = if csv { Delimiter::Comma } else { Delimiter::ColonSpace };
        let rendered = render(&outcomes, delimiter);

        prop_assert_eq!(rendered.lines().count(), outcomes.len());
        prop_assert!(!rendered.ends_with('\n'));
        for (line, outcome) in rendered.lines().zip(&outcomes) {
            prop_assert_eq!(
                line.to_string(),
                format!("{}{}{}", outcome.url, delimiter.as_str(), outcome.status)
            );
        }
    }

    #[test]
    fn test_error_report_lists_only_failures(
        rows in prop::collection::vec((url_strategy(), status_strategy()), 0..20),
    ) {
        let outcomes: Vec<ProbeOutcome> = rows
            .iter()
            .map(|(url, status)| ProbeOutcome::new(url.clone(), *status))
            .collect();
        let failures: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.status == ProbeStatus::Error)
            .map(|o| o.url.as_str())
            .collect();

        let rendered = render_errors_only(&outcomes);

        prop_assert_eq!(rendered.lines().collect::<Vec<_>>(), failures);
    }
}
