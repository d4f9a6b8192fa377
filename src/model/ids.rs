// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

/// A stable identifier for diagram objects.
///
/// Ids are single tokens: non-empty, no whitespace and no `/`, because they appear verbatim in
/// notation aliases, SVG `id` attributes and store file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id_token(&value)?;
        Ok(Self { value, _marker: PhantomData })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Numeric suffix of ids shaped like `<prefix>-<n>`.
    pub fn numeric_suffix(&self) -> Option<u64> {
        let (_, digits) = self.value.rsplit_once('-')?;
        digits.parse::<u64>().ok()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id must not contain '/'")]
    ContainsSlash,
    #[error("id must not contain whitespace")]
    ContainsWhitespace,
}

fn validate_id_token(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('/') {
        return Err(IdError::ContainsSlash);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementIdTag {}
pub type ElementId = Id<ElementIdTag>;

/// Allocates `<prefix>-<n>` with `n` one past the largest numeric suffix in `existing`.
///
/// The counter is shared across prefixes so `service-1` followed by a database yields
/// `database-2`; allocation depends only on the ids already present.
pub fn next_element_id<'a>(
    existing: impl IntoIterator<Item = &'a ElementId>,
    prefix: &str,
) -> ElementId {
    let max = existing.into_iter().filter_map(ElementId::numeric_suffix).max().unwrap_or(0);
    let prefix = if prefix.is_empty() { "element" } else { prefix };
    ElementId::new(format!("{prefix}-{}", max.saturating_add(1))).unwrap_or_else(|_| {
        // Prefixes come from kind names; fall back for anything that is not a plain token.
        ElementId { value: format!("element-{}", max.saturating_add(1)), _marker: PhantomData }
    })
}

#[cfg(test)]
mod tests {
    use super::{next_element_id, ElementId, Id, IdError};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_slash() {
        let result: Result<Id<()>, _> = Id::new("a/b");
        assert_eq!(result, Err(IdError::ContainsSlash));
    }

    #[test]
    fn id_rejects_whitespace() {
        let result: Result<Id<()>, _> = Id::new("service 1");
        assert_eq!(result, Err(IdError::ContainsWhitespace));
    }

    #[test]
    fn next_id_continues_after_largest_suffix() {
        let ids = ["service-1", "database-7", "legacy"]
            .into_iter()
            .map(|raw| ElementId::new(raw).expect("element id"))
            .collect::<Vec<_>>();

        assert_eq!(next_element_id(&ids, "api").as_str(), "api-8");
        assert_eq!(next_element_id(&[], "service").as_str(), "service-1");
    }

    #[test]
    fn next_id_falls_back_for_unusable_prefix() {
        assert_eq!(next_element_id(&[], "two words").as_str(), "element-1");
        assert_eq!(next_element_id(&[], "").as_str(), "element-1");
    }
}
