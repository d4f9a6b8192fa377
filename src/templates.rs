// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in starter diagrams.
//!
//! A template is a single free-text command handed to the interpreter as is, so it draws
//! whatever the keyword rules make of the sentence.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Cloud,
    Microservices,
    Containers,
    Serverless,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Cloud,
        TemplateCategory::Microservices,
        TemplateCategory::Containers,
        TemplateCategory::Serverless,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Microservices => "microservices",
            Self::Containers => "containers",
            Self::Serverless => "serverless",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cloud => "Cloud Architecture",
            Self::Microservices => "Microservices",
            Self::Containers => "Container Architecture",
            Self::Serverless => "Serverless",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub command: &'static str,
}

pub const TEMPLATES: [Template; 4] = [
    Template {
        id: "aws-simple",
        name: "Simple AWS Architecture",
        category: TemplateCategory::Cloud,
        command: "Create a system called AWS Cloud with a user and a service called API Gateway \
                  connected to a microservice called Lambda Function connected to a database \
                  called DynamoDB.",
    },
    Template {
        id: "microservices-basic",
        name: "Basic Microservices",
        category: TemplateCategory::Microservices,
        command: "Create a system with an API gateway connected to three microservices. First \
                  microservice called User Service connected to a database called User DB. \
                  Second microservice called Order Service connected to a database called Order \
                  DB. Third microservice called Payment Service connected to a database called \
                  Payment DB.",
    },
    Template {
        id: "container-arch",
        name: "Container Architecture",
        category: TemplateCategory::Containers,
        command: "Create a system with a container called Frontend connected to a container \
                  called API Gateway. API Gateway connected to three containers called Auth \
                  Service, Product Service, and Cart Service. Each service connected to its own \
                  database.",
    },
    Template {
        id: "serverless",
        name: "Serverless Pattern",
        category: TemplateCategory::Serverless,
        command: "Create a system with an API Gateway connected to three Lambda functions. Each \
                  function connected to different DynamoDB tables.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template {id:?}; run `archi template` to list them")]
pub struct UnknownTemplate {
    pub id: String,
}

/// Looks a template up by id, ignoring case and surrounding whitespace.
pub fn find_template(id: &str) -> Result<&'static Template, UnknownTemplate> {
    let needle = id.trim();
    TEMPLATES
        .iter()
        .find(|template| template.id.eq_ignore_ascii_case(needle))
        .ok_or_else(|| UnknownTemplate { id: needle.to_owned() })
}

pub fn templates_in(category: TemplateCategory) -> impl Iterator<Item = &'static Template> {
    TEMPLATES.iter().filter(move |template| template.category == category)
}
