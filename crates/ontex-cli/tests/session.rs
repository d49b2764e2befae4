//! End-to-end views over the bundled restaurant document.

use ontex_cli::cli::ShowArgs;
use ontex_cli::commands::execute_show;
use ontex_cli::config::OutputFormat;
use ontex_cli::{CliError, Config, Formatter, Session};
use serde_json::Value;
use std::path::Path;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/maison_elite.owl");

fn open() -> Session {
    Session::open(Path::new(FIXTURE), &Config::default()).unwrap()
}

fn json() -> Formatter {
    Formatter::new(OutputFormat::Json, false)
}

fn show(session: &Session, id: &str) -> Value {
    let individual = session.ontology().individuals().get(id).unwrap();
    serde_json::from_str(&json().individual(session, individual).unwrap()).unwrap()
}

#[test]
fn test_summary_counts() {
    let session = open();
    let summary: Value = serde_json::from_str(&json().summary(&session).unwrap()).unwrap();

    assert_eq!(summary["individuals"], 14);
    assert_eq!(summary["classes"], 20);
    assert_eq!(summary["object_properties"], 5);
    assert_eq!(summary["data_properties"], 8);
    assert_eq!(summary["skipped"]["classes"], 1);
    assert_eq!(summary["skipped"]["individuals"], 1);
    assert_eq!(summary["dropped_assertions"], 1);
}

#[test]
fn test_show_resolves_relations() {
    let session = open();
    let veloute = show(&session, "TruffleVelouté");

    assert_eq!(veloute["name"], "Truffle Velouté");
    assert_eq!(veloute["dominant_type"], "Starter");
    assert_eq!(veloute["bucket"], "Dishes");

    let relations = veloute["relations"].as_array().unwrap();
    assert_eq!(relations.len(), 2);
    assert_eq!(relations[0]["property"], "preparedBy");
    assert_eq!(relations[0]["target"], "ChefSofia");
    assert_eq!(relations[0]["resolved"], true);
    assert_eq!(relations[0]["bucket"], "Chefs");
    assert_eq!(relations[1]["bucket"], "Ingredients");

    let referrers = veloute["referrers"].as_array().unwrap();
    assert_eq!(referrers.len(), 1);
    assert_eq!(referrers[0]["id"], "TastingMenu");
    assert_eq!(referrers[0]["property"], "includes");
}

#[test]
fn test_show_keeps_dangling_reference() {
    let session = open();
    let wagyu = show(&session, "WagyuBeef");

    let dangling = wagyu["relations"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["target"] == "GhostIngredient")
        .unwrap();
    assert_eq!(dangling["resolved"], false);
    assert!(dangling["bucket"].is_null());
}

#[test]
fn test_show_lists_referrers() {
    let session = open();
    let sofia = show(&session, "ChefSofia");

    assert_eq!(sofia["dominant_type"], "HeadChef");
    assert_eq!(sofia["bucket"], "Chefs");
    let referrers: Vec<&str> = sofia["referrers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(referrers, vec!["TruffleVelouté", "Souffle"]);
}

#[test]
fn test_untyped_individual_shown_as_other() {
    let session = open();
    let sommelier = show(&session, "Sommelier");

    assert_eq!(sommelier["dominant_type"], "Other");
    assert_eq!(sommelier["bucket"], "Other");
}

#[test]
fn test_groups_follow_bucket_order() {
    let session = open();
    let classifier = session.classifier();
    let grouping = classifier.group(session.ontology().individuals());
    let groups: Value = serde_json::from_str(&json().groups(&grouping, classifier).unwrap()).unwrap();

    let names: Vec<&str> = groups
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["bucket"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Restaurant",
            "Dishes",
            "Chefs",
            "Menus",
            "Customers",
            "Reservations",
            "Ingredients",
            "Awards",
            "Other"
        ]
    );

    let dishes: Vec<&str> = groups[1]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(dishes, vec!["Souffle", "WagyuBeef", "TruffleVelouté"]);
}

#[test]
fn test_schema_properties() {
    let session = open();
    let schema: Value = serde_json::from_str(&json().schema(session.ontology()).unwrap()).unwrap();

    let object_names: Vec<&str> = schema["object_properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        object_names,
        vec!["containsIngredient", "includes", "madeBy", "preparedBy", "receivedAward"]
    );

    let name = schema["data_properties"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "name")
        .unwrap();
    assert_eq!(name["domains"], serde_json::json!(["Person", "Dish", "Restaurant"]));

    assert_eq!(schema["classes"][0]["depth"], 0);
}

#[test]
fn test_show_unknown_individual() {
    let session = open();
    let result = execute_show(
        ShowArgs {
            id: "Nobody".to_string(),
        },
        &session,
        &json(),
    );
    assert!(matches!(result, Err(CliError::NotFound(_))));
}
