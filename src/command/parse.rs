// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::NodeKind;

/// What a free-text command asks for, before it is resolved against the element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Reset,
    Add { kind: NodeKind, label: String },
    Connect { source: String, target: String },
    /// `None` removes the most recently added element.
    Delete { label: Option<String> },
    /// A connect command whose sides could not be split on `to`.
    MalformedConnect,
    Unrecognized,
}

struct Patterns {
    kinds: Vec<(NodeKind, Regex, Regex)>,
    connect_word: Regex,
    delete_word: Regex,
    connect: Regex,
    delete: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let kinds = NodeKind::ALL
            .into_iter()
            .map(|kind| {
                let keyword = regex::escape(kind.keyword());
                let word = Regex::new(&format!(r"(?i)\b{keyword}s?\b")).expect("valid regex");
                let label = Regex::new(&format!(
                    r#"(?i)\b{keyword}\s+(?:called|named|labeled)?\s*["']?([\w\s-]+)["']?"#
                ))
                .expect("valid regex");
                (kind, word, label)
            })
            .collect();
        Patterns {
            kinds,
            connect_word: Regex::new(r"(?i)\bconnect\b").expect("valid regex"),
            delete_word: Regex::new(r"(?i)\b(?:delete|remove)\b").expect("valid regex"),
            connect: Regex::new(
                r#"(?i)\bconnect\s+(?:the\s+)?["']?(.+?)["']?\s+to\s+(?:the\s+)?["']?(.+?)["']?\s*$"#,
            )
            .expect("valid regex"),
            delete: Regex::new(r#"(?i)\b(?:delete|remove)\s+(?:the\s+)?["']?(.+?)["']?\s*$"#)
                .expect("valid regex"),
        }
    })
}

/// Classifies a command.
///
/// `reset` wins outright. A leading `connect`, `delete` or `remove` verb is dispatched next;
/// otherwise the first element keyword in priority order (service, database, api, microservice,
/// user, system, container, component) adds an element, then `connect`, then `delete`/`remove`.
/// Keywords match whole words, ignoring case.
pub fn parse_command(command: &str) -> Intent {
    let trimmed = command.trim();
    if trimmed.eq_ignore_ascii_case("reset") {
        return Intent::Reset;
    }

    let patterns = patterns();
    let first_word = trimmed.split_whitespace().next().unwrap_or_default().to_lowercase();
    match first_word.as_str() {
        "connect" => return parse_connect(patterns, trimmed),
        "delete" | "remove" => return parse_delete(patterns, trimmed),
        _ => {}
    }

    for (kind, word, label) in &patterns.kinds {
        if word.is_match(trimmed) {
            return Intent::Add { kind: *kind, label: extract_label(label, trimmed, *kind) };
        }
    }

    if patterns.connect_word.is_match(trimmed) {
        return parse_connect(patterns, trimmed);
    }
    if patterns.delete_word.is_match(trimmed) {
        return parse_delete(patterns, trimmed);
    }
    Intent::Unrecognized
}

fn extract_label(pattern: &Regex, command: &str, kind: NodeKind) -> String {
    pattern
        .captures(command)
        .and_then(|captures| captures.get(1))
        .map(|label| label.as_str().trim())
        .filter(|label| !label.is_empty())
        .map_or_else(|| kind.default_label().to_owned(), str::to_owned)
}

fn parse_connect(patterns: &Patterns, command: &str) -> Intent {
    let Some(captures) = patterns.connect.captures(command) else {
        return Intent::MalformedConnect;
    };
    let side = |index: usize| {
        captures.get(index).map(|side| strip_quotes(side.as_str())).unwrap_or_default()
    };
    let (source, target) = (side(1), side(2));
    if source.is_empty() || target.is_empty() {
        return Intent::MalformedConnect;
    }
    Intent::Connect { source, target }
}

fn parse_delete(patterns: &Patterns, command: &str) -> Intent {
    let label = patterns
        .delete
        .captures(command)
        .and_then(|captures| captures.get(1))
        .map(|label| strip_quotes(label.as_str()))
        .filter(|label| !label.is_empty());
    Intent::Delete { label }
}

fn strip_quotes(raw: &str) -> String {
    raw.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_owned()
}
