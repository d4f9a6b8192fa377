// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic benchmark inputs (no RNG).

use archi::model::{Element, NodeKind};
use archi::Interpreter;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::Large => "large",
        }
    }

    pub fn nodes(self) -> usize {
        match self {
            Case::Small => 8,
            Case::Medium => 64,
            Case::Large => 256,
        }
    }
}

pub fn node_label(index: usize) -> String {
    format!("Node {index:04}")
}

/// One add command per node, cycling through every kind, then a chain of connects.
pub fn script(case: Case) -> Vec<String> {
    let nodes = case.nodes();
    let mut commands = Vec::with_capacity(nodes * 2);
    for index in 0..nodes {
        let kind = NodeKind::ALL[index % NodeKind::ALL.len()];
        commands.push(format!("add {} named {}", kind.keyword(), node_label(index)));
    }
    for index in 1..nodes {
        commands.push(format!("connect {} to {}", node_label(index - 1), node_label(index)));
    }
    commands
}

pub fn elements(case: Case) -> Vec<Element> {
    Interpreter::default().interpret_script(script(case), &[])
}
