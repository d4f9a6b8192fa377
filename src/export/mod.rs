// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document exports of an element list: JSON, standalone SVG and PlantUML.

pub mod svg;

use thiserror::Error;

use crate::format::export_plantuml;
use crate::model::Element;
use crate::store::{elements_to_json, StoreError};

pub use self::svg::{export_svg, render_svg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Svg,
    #[value(name = "plantuml")]
    PlantUml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Svg => "svg",
            Self::PlantUml => "puml",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("json export failed: {0}")]
    Json(#[from] StoreError),
}

pub fn export(format: ExportFormat, elements: &[Element]) -> Result<String, ExportError> {
    let text = match format {
        ExportFormat::Json => elements_to_json(elements)?,
        ExportFormat::Svg => export_svg(elements),
        ExportFormat::PlantUml => export_plantuml(elements),
    };
    log::debug!("exported {} element(s) as {format:?} ({} bytes)", elements.len(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{export, ExportFormat};
    use crate::model::fixtures::three_tier;

    #[rstest]
    #[case(ExportFormat::Json, "\"type\": \"database\"")]
    #[case(ExportFormat::Svg, "<svg")]
    #[case(ExportFormat::PlantUml, "@startuml")]
    fn every_format_renders(#[case] format: ExportFormat, #[case] needle: &str) {
        let text = export(format, &three_tier()).expect("export");
        assert!(text.contains(needle), "{format:?} output missing {needle:?}:\n{text}");
    }

    #[test]
    fn json_export_parses_back() {
        let text = export(ExportFormat::Json, &three_tier()).expect("export");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(5));
    }
}
