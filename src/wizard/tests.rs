// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use crate::command::interpret_script;
use crate::model::{ElementKind, NodeKind};

use super::{DatabaseChoice, SystemType, UserInterface, WizardAnswers, WizardError};

fn answers() -> WizardAnswers {
    WizardAnswers {
        system_type: Some(SystemType::Microservice),
        system_name: Some("Shop".to_owned()),
        components: vec!["Orders".to_owned(), "Payments".to_owned()],
        database: Some(DatabaseChoice::Sql),
        user_interface: Some(UserInterface::Web),
        auth: None,
        deployment: None,
    }
}

#[test]
fn parses_toml_with_comma_separated_components() {
    let input = r#"
system_type = "event_driven"
system_name = "Ledger"
components = "Ingest, Enrich , ,Publish"
database_type = "nosql"
user_interface = "mixed"
auth = "OAuth2"
"#;

    let answers = WizardAnswers::from_toml_str(input).expect("answers");

    assert_eq!(answers.system_type, Some(SystemType::EventDriven));
    assert_eq!(answers.components, vec!["Ingest", "Enrich", "Publish"]);
    assert_eq!(answers.database, Some(DatabaseChoice::Nosql));
    assert_eq!(answers.auth(), Some("OAuth2"));
    assert_eq!(answers.deployment(), None);
}

#[test]
fn parses_toml_component_array() {
    let input = "system_type = \"monolith\"\ncomponents = [\"Core\", \" Admin \"]\n";
    let answers = WizardAnswers::from_toml_str(input).expect("answers");
    assert_eq!(answers.components, vec!["Core", "Admin"]);
    assert_eq!(answers.system_name(), "Main System");
}

#[test]
fn missing_system_type_is_rejected() {
    let err = WizardAnswers::from_toml_str("system_name = \"Shop\"").expect_err("missing answer");
    assert!(matches!(err, WizardError::MissingAnswer { question: "system_type" }));
}

#[test]
fn unknown_choice_is_a_parse_error() {
    let err = WizardAnswers::from_toml_str("system_type = \"mainframe\"").expect_err("bad choice");
    assert!(matches!(err, WizardError::Parse(_)));
}

#[test]
fn commands_chain_components_and_database() {
    let commands = answers().commands();
    assert_eq!(
        commands,
        vec![
            "system Shop",
            "microservice Orders",
            "connect Shop to Orders",
            "microservice Payments",
            "connect Orders to Payments",
            "database SQL Database",
            "connect Payments to SQL Database",
            "user Client User",
            "service Web Interface",
            "connect Client User to Web Interface",
            "connect Web Interface to Orders",
        ]
    );
}

#[rstest]
#[case(SystemType::Microservice, NodeKind::Microservice)]
#[case(SystemType::Monolith, NodeKind::Component)]
#[case(SystemType::Serverless, NodeKind::Service)]
#[case(SystemType::EventDriven, NodeKind::Service)]
fn component_kind_follows_system_type(#[case] system_type: SystemType, #[case] kind: NodeKind) {
    let answers = WizardAnswers { system_type: Some(system_type), ..answers() };
    let elements = interpret_script(answers.commands(), &[]);
    let orders = elements
        .iter()
        .find(|element| element.label_matches("Orders"))
        .expect("orders element");
    assert_eq!(orders.kind(), ElementKind::Node(kind));
}

#[test]
fn component_names_with_higher_priority_keywords_follow_the_keyword_order() {
    let answers = WizardAnswers {
        components: vec!["User Service".to_owned()],
        database: None,
        user_interface: None,
        ..answers()
    };

    let elements = interpret_script(answers.commands(), &[]);

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].kind(), ElementKind::Node(NodeKind::Service));
    assert_eq!(elements[1].label(), Some("Service"));
}

#[test]
fn mixed_interface_script_draws_every_connection() {
    let answers = WizardAnswers {
        user_interface: Some(UserInterface::Mixed),
        components: Vec::new(),
        database: None,
        ..answers()
    };

    let elements = interpret_script(answers.commands(), &[]);

    let connections = elements
        .iter()
        .filter(|element| element.is_connection())
        .filter_map(|element| element.label())
        .collect::<Vec<_>>();
    assert_eq!(
        connections,
        vec![
            "Client User to Web Interface",
            "Client User to Mobile App",
            "Web Interface to API Gateway",
            "Mobile App to API Gateway",
            "API Gateway to Shop",
        ]
    );
}
