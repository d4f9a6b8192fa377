// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Guided architecture questionnaire.
//!
//! Answers are plain data (usually read from a TOML file). They expand into an interpreter
//! command script and feed the PlantUML generator.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    Microservice,
    Monolith,
    Serverless,
    EventDriven,
}

impl SystemType {
    pub fn title(self) -> &'static str {
        match self {
            Self::Microservice => "Microservice Architecture",
            Self::Monolith => "Monolithic Application",
            Self::Serverless => "Serverless Architecture",
            Self::EventDriven => "Event-Driven Architecture",
        }
    }

    /// Interpreter keyword used for each listed component.
    pub fn component_keyword(self) -> &'static str {
        match self {
            Self::Microservice => "microservice",
            Self::Monolith => "component",
            Self::Serverless | Self::EventDriven => "service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseChoice {
    Sql,
    Nosql,
    Graph,
    Multi,
}

impl DatabaseChoice {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sql => "SQL Database",
            Self::Nosql => "NoSQL Database",
            Self::Graph => "Graph Database",
            Self::Multi => "Primary Database",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserInterface {
    Web,
    Mobile,
    Api,
    Mixed,
}

impl UserInterface {
    /// Client-facing entry points, in declaration order.
    pub fn entry_points(self) -> &'static [&'static str] {
        match self {
            Self::Web => &["Web Interface"],
            Self::Mobile => &["Mobile App"],
            Self::Api => &["API Gateway"],
            Self::Mixed => &["Web Interface", "Mobile App", "API Gateway"],
        }
    }
}

pub const DEFAULT_SYSTEM_NAME: &str = "Main System";
const CLIENT_USER: &str = "Client User";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardAnswers {
    pub system_type: Option<SystemType>,
    pub system_name: Option<String>,
    /// A TOML array or a single comma separated string.
    #[serde(deserialize_with = "deserialize_components")]
    pub components: Vec<String>,
    #[serde(alias = "database_type")]
    pub database: Option<DatabaseChoice>,
    pub user_interface: Option<UserInterface>,
    pub auth: Option<String>,
    pub deployment: Option<String>,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("wizard question `{question}` must be answered")]
    MissingAnswer { question: &'static str },
    #[error("invalid wizard answers: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComponentsField {
    List(Vec<String>),
    Text(String),
}

fn deserialize_components<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match ComponentsField::deserialize(deserializer)? {
        ComponentsField::List(items) => items,
        ComponentsField::Text(text) => text.split(',').map(str::to_owned).collect(),
    };
    Ok(raw.into_iter().map(|item| item.trim().to_owned()).filter(|item| !item.is_empty()).collect())
}

impl WizardAnswers {
    pub fn from_toml_str(input: &str) -> Result<Self, WizardError> {
        let answers: Self = toml::from_str(input)?;
        answers.validate()?;
        Ok(answers)
    }

    pub fn validate(&self) -> Result<(), WizardError> {
        if self.system_type.is_none() {
            return Err(WizardError::MissingAnswer { question: "system_type" });
        }
        Ok(())
    }

    pub fn system_name(&self) -> &str {
        self.system_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SYSTEM_NAME)
    }

    pub fn auth(&self) -> Option<&str> {
        non_blank(self.auth.as_deref())
    }

    pub fn deployment(&self) -> Option<&str> {
        non_blank(self.deployment.as_deref())
    }

    /// Interpreter script that draws the answered architecture.
    pub fn commands(&self) -> Vec<String> {
        let system = self.system_name();
        let keyword = self.system_type.unwrap_or(SystemType::Serverless).component_keyword();
        let mut commands = vec![format!("system {system}")];

        for (index, component) in self.components.iter().enumerate() {
            commands.push(format!("{keyword} {component}"));
            let previous = match index {
                0 => system,
                _ => self.components[index - 1].as_str(),
            };
            commands.push(format!("connect {previous} to {component}"));
        }

        if let Some(database) = self.database {
            let name = database.name();
            commands.push(format!("database {name}"));
            if let Some(last) = self.components.last() {
                commands.push(format!("connect {last} to {name}"));
            }
        }

        if let Some(interface) = self.user_interface {
            commands.push(format!("user {CLIENT_USER}"));
            self.push_interface_commands(interface, &mut commands);
        }
        commands
    }

    fn push_interface_commands(&self, interface: UserInterface, commands: &mut Vec<String>) {
        let target = self.components.first().map_or(self.system_name(), String::as_str);
        match interface {
            UserInterface::Web | UserInterface::Mobile => {
                let name = interface.entry_points()[0];
                commands.push(format!("service {name}"));
                commands.push(format!("connect {CLIENT_USER} to {name}"));
                commands.push(format!("connect {name} to {target}"));
            }
            UserInterface::Api => {
                commands.push("api API Gateway".to_owned());
                commands.push(format!("connect {CLIENT_USER} to API Gateway"));
                commands.push(format!("connect API Gateway to {target}"));
            }
            UserInterface::Mixed => {
                commands.extend(
                    [
                        "service Web Interface",
                        "service Mobile App",
                        "api API Gateway",
                        "connect Client User to Web Interface",
                        "connect Client User to Mobile App",
                        "connect Web Interface to API Gateway",
                        "connect Mobile App to API Gateway",
                    ]
                    .map(str::to_owned),
                );
                commands.push(format!("connect API Gateway to {target}"));
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests;
