// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the element list.
//!
//! The whole list is one JSON array under the fixed key [`ELEMENTS_KEY`] of a [`KeyValueStore`].
//! There is no versioning and no migration.

pub mod kv;
pub mod record;

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Element;

pub use kv::{DirStore, KeyValueStore, MemoryStore, WriteDurability};
pub use record::{ElementRecord, RecordError};

pub const ELEMENTS_KEY: &str = "elements";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("refusing to write through symlink {}", path.display())]
    SymlinkRefused { path: PathBuf },
    #[error("invalid store key {key:?}")]
    InvalidKey { key: String },
    #[error("stored value under {key:?} is not valid JSON: {source}")]
    Json { key: String, source: serde_json::Error },
    #[error("stored element #{index} is invalid: {source}")]
    Record { index: usize, source: RecordError },
    #[error("stored elements repeat id {id}")]
    DuplicateId { id: String },
}

/// Loads the element list; an absent key loads as an empty list.
pub fn load_elements(store: &impl KeyValueStore) -> Result<Vec<Element>, StoreError> {
    let Some(raw) = store.get(ELEMENTS_KEY)? else {
        log::info!("no stored elements; starting empty");
        return Ok(Vec::new());
    };
    let records: Vec<ElementRecord> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Json { key: ELEMENTS_KEY.to_owned(), source })?;

    let mut seen = HashSet::new();
    let mut elements = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let element = Element::try_from(record).map_err(|source| StoreError::Record { index, source })?;
        if !seen.insert(element.id().clone()) {
            return Err(StoreError::DuplicateId { id: element.id().to_string() });
        }
        elements.push(element);
    }
    log::info!("loaded {} element(s)", elements.len());
    Ok(elements)
}

pub fn save_elements(store: &mut impl KeyValueStore, elements: &[Element]) -> Result<(), StoreError> {
    let json = elements_to_json(elements)?;
    store.set(ELEMENTS_KEY, &json)?;
    log::info!("saved {} element(s)", elements.len());
    Ok(())
}

/// Pretty-printed JSON array in the stored record shape.
pub fn elements_to_json(elements: &[Element]) -> Result<String, StoreError> {
    let records = elements.iter().map(ElementRecord::from).collect::<Vec<_>>();
    serde_json::to_string_pretty(&records)
        .map_err(|source| StoreError::Json { key: ELEMENTS_KEY.to_owned(), source })
}
