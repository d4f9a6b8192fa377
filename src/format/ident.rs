// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

/// Turns arbitrary text into a PlantUML alias: lowercase ASCII alphanumerics and `_`, never
/// empty and never starting with a digit.
pub fn plantuml_alias(raw: &str) -> String {
    let mut alias = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            alias.push(ch.to_ascii_lowercase());
        } else if !alias.ends_with('_') {
            alias.push('_');
        }
    }
    let alias = alias.trim_matches('_');
    match alias.chars().next() {
        None => "node".to_owned(),
        Some(first) if first.is_ascii_digit() => format!("n_{alias}"),
        Some(_) => alias.to_owned(),
    }
}

/// Text safe to place inside `"..."` or `[...]` declarations.
pub fn escape_label(label: &str) -> String {
    label
        .chars()
        .map(|ch| match ch {
            '"' => '\'',
            '[' => '(',
            ']' => ')',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// Hands out PlantUML aliases that never collide. Names passed to [`AliasTable::alias_for`] keep
/// one alias each; different names that sanitize to the same alias get numeric suffixes.
#[derive(Debug, Default)]
pub struct AliasTable {
    by_name: BTreeMap<String, String>,
    taken: BTreeSet<String>,
}

impl AliasTable {
    pub fn alias_for(&mut self, name: &str) -> String {
        if let Some(alias) = self.by_name.get(name) {
            return alias.clone();
        }
        let alias = self.fresh_alias(name);
        self.by_name.insert(name.to_owned(), alias.clone());
        alias
    }

    /// Alias for a one-off declaration; never shared, even with an earlier use of `name`.
    pub fn fresh_alias(&mut self, name: &str) -> String {
        let base = plantuml_alias(name);
        let mut alias = base.clone();
        let mut suffix = 2usize;
        while self.taken.contains(&alias) {
            alias = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.taken.insert(alias.clone());
        alias
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{escape_label, plantuml_alias, AliasTable};

    #[rstest]
    #[case("Payment API", "payment_api")]
    #[case("  Orders--DB ", "orders_db")]
    #[case("service-1", "service_1")]
    #[case("3D Renderer", "n_3d_renderer")]
    #[case("***", "node")]
    #[case("Übersicht", "bersicht")]
    fn aliases_are_plain_tokens(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(plantuml_alias(raw), expected);
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let mut table = AliasTable::default();
        assert_eq!(table.alias_for("Web App"), "web_app");
        assert_eq!(table.alias_for("web-app"), "web_app_2");
        assert_eq!(table.alias_for("Web App"), "web_app");
        assert!(table.contains("web-app"));
    }

    #[test]
    fn fresh_aliases_skip_names_already_taken() {
        let mut table = AliasTable::default();
        assert_eq!(table.alias_for("OAuth2"), "oauth2");
        assert_eq!(table.fresh_alias("OAuth2"), "oauth2_2");
        assert_eq!(table.fresh_alias("OAuth2"), "oauth2_3");
        assert_eq!(table.alias_for("OAuth2"), "oauth2");
    }

    #[test]
    fn labels_lose_delimiters() {
        assert_eq!(escape_label("say \"hi\" [now]"), "say 'hi' (now)");
    }
}
