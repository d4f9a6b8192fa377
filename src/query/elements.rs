// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Element;

/// Minimum normalized similarity for a label suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Boxes whose label or kind name contains `term`, ignoring case. A blank term matches every box.
pub fn search<'a>(elements: &'a [Element], term: &str) -> Vec<&'a Element> {
    let term = term.trim().to_lowercase();
    elements
        .iter()
        .filter(|element| !element.is_connection())
        .filter(|element| {
            term.is_empty()
                || element.kind().as_str().contains(&term)
                || element.label().is_some_and(|label| label.to_lowercase().contains(&term))
        })
        .collect()
}

/// Closest box label to `needle`, if any scores at least [`SUGGESTION_THRESHOLD`].
pub fn suggest_label<'a>(elements: &'a [Element], needle: &str) -> Option<&'a str> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(f64, &str)> = None;
    for label in elements.iter().filter(|element| !element.is_connection()).filter_map(Element::label) {
        let score = rapidfuzz::fuzz::ratio(needle.chars(), label.to_lowercase().chars());
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, label));
        }
    }
    best.map(|(_, label)| label)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{search, suggest_label};
    use crate::model::fixtures::three_tier;

    fn ids(found: Vec<&crate::model::Element>) -> Vec<&str> {
        found.into_iter().map(|element| element.id().as_str()).collect()
    }

    #[rstest]
    #[case("", vec!["component-1", "api-2", "database-3"])]
    #[case("  ", vec!["component-1", "api-2", "database-3"])]
    #[case("ORDERS", vec!["database-3"])]
    #[case("api", vec!["api-2"])]
    #[case("a", vec!["component-1", "api-2", "database-3"])]
    #[case("warehouse", vec![])]
    fn search_matches_labels_and_kinds(#[case] term: &str, #[case] expected: Vec<&str>) {
        let elements = three_tier();
        assert_eq!(ids(search(&elements, term)), expected);
    }

    #[test]
    fn suggestion_finds_near_miss() {
        let elements = three_tier();
        assert_eq!(suggest_label(&elements, "Gatway"), Some("Gateway"));
        assert_eq!(suggest_label(&elements, "order"), Some("Orders"));
    }

    #[test]
    fn suggestion_ignores_far_labels_and_connections() {
        let elements = three_tier();
        assert_eq!(suggest_label(&elements, "zzzzzz"), None);
        assert_eq!(suggest_label(&elements, ""), None);
        assert_ne!(suggest_label(&elements, "Web App to Gatewa"), Some("Web App to Gateway"));
    }
}
