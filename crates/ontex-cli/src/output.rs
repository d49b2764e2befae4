//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::session::Session;
use colored::*;
use ontex_classifier::{Classifier, Grouping};
use ontex_domain::vocab::{NAME_PROPERTY, UNKNOWN};
use ontex_domain::{Assertion, Individual, Ontology, ResolvedAssertion};
use ontex_query::guide::Example;
use ontex_query::Query;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Entity counts of the loaded document.
    pub fn summary(&self, session: &Session) -> Result<String> {
        let stats = session.ontology().stats();
        let report = session.report();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "document": session.source().display().to_string(),
                "individuals": stats.individuals,
                "classes": stats.classes,
                "properties": stats.properties(),
                "object_properties": stats.object_properties,
                "data_properties": stats.data_properties,
                "skipped": {
                    "classes": report.skipped_classes,
                    "object_properties": report.skipped_object_properties,
                    "data_properties": report.skipped_data_properties,
                    "individuals": report.skipped_individuals,
                },
                "dropped_assertions": report.dropped_assertions,
                "name_collisions": report.name_collisions,
            }))?),
            OutputFormat::Quiet => Ok(format!(
                "{} {} {}",
                stats.individuals,
                stats.classes,
                stats.properties()
            )),
            OutputFormat::Table => {
                let properties = format!(
                    "{} ({} object, {} data)",
                    stats.properties(),
                    stats.object_properties,
                    stats.data_properties
                );
                let rows = vec![
                    vec!["Document".to_string(), session.source().display().to_string()],
                    vec!["Individuals".to_string(), stats.individuals.to_string()],
                    vec!["Classes".to_string(), stats.classes.to_string()],
                    vec!["Properties".to_string(), properties],
                    vec!["Skipped elements".to_string(), report.skipped().to_string()],
                    vec![
                        "Dropped assertions".to_string(),
                        report.dropped_assertions.to_string(),
                    ],
                ];
                let mut out = table(&["", "Count"], rows);
                if report.name_collisions > 0 {
                    out.push('\n');
                    out.push_str(&self.warning(&format!(
                        "{} entities share a local name with an earlier one and replaced it",
                        report.name_collisions
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Class tree and property schemas.
    pub fn schema(&self, ontology: &Ontology) -> Result<String> {
        let tree = ontology.hierarchy().walk();

        let mut object_properties: Vec<_> = ontology.object_properties().iter().collect();
        object_properties.sort_by(|a, b| a.name.cmp(&b.name));
        let mut data_properties: Vec<_> = ontology.data_properties().iter().collect();
        data_properties.sort_by(|a, b| a.name.cmp(&b.name));

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "classes": tree
                    .iter()
                    .map(|node| json!({ "name": node.name, "depth": node.depth }))
                    .collect::<Vec<_>>(),
                "object_properties": object_properties
                    .iter()
                    .map(|p| json!({ "name": p.name, "domain": p.domain, "range": p.range }))
                    .collect::<Vec<_>>(),
                "data_properties": data_properties
                    .iter()
                    .map(|p| json!({ "name": p.name, "domains": p.domains, "range": p.range }))
                    .collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => Ok(tree
                .iter()
                .map(|node| node.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut out = String::new();

                out.push_str(&self.heading("CLASS TREE"));
                out.push('\n');
                for node in &tree {
                    let marker = if node.depth == 0 { "◆" } else { "└" };
                    out.push_str(&format!("{}{} {}\n", "  ".repeat(node.depth), marker, node.name));
                }

                out.push('\n');
                out.push_str(&self.heading("OBJECT PROPERTIES"));
                out.push('\n');
                out.push_str(&table(
                    &["Property", "Domain ──▶ Range"],
                    object_properties
                        .iter()
                        .map(|p| vec![p.name.clone(), format!("{} ──▶ {}", p.domain, p.range)]),
                ));

                out.push_str("\n\n");
                out.push_str(&self.heading("DATA PROPERTIES"));
                out.push('\n');
                out.push_str(&table(
                    &["Property", "Domains", "Range"],
                    data_properties
                        .iter()
                        .map(|p| vec![p.name.clone(), p.domains_label(), p.range.clone()]),
                ));
                Ok(out)
            }
        }
    }

    /// Buckets and their members.
    pub fn groups(&self, grouping: &Grouping<'_>, classifier: &Classifier) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let groups: Vec<_> = grouping
                    .iter()
                    .map(|group| {
                        json!({
                            "bucket": group.name,
                            "members": group
                                .members
                                .iter()
                                .map(|i| member_json(i, classifier))
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&groups)?)
            }
            OutputFormat::Quiet => Ok(grouping
                .iter()
                .flat_map(|group| group.ids())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut sections = Vec::new();
                for group in grouping {
                    let mut section = self.heading(&format!("{} ({})", group.name, group.members.len()));
                    section.push('\n');
                    if group.is_empty() {
                        section.push_str("  (empty)");
                    } else {
                        section.push_str(&table(
                            &["ID", "Name", "Type"],
                            group.members.iter().map(|i| {
                                vec![
                                    i.name.clone(),
                                    i.display_name().to_string(),
                                    classifier.dominant_type(i).to_string(),
                                ]
                            }),
                        ));
                    }
                    sections.push(section);
                }
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Details, relations and referrers of one individual.
    pub fn individual(&self, session: &Session, individual: &Individual) -> Result<String> {
        let ontology = session.ontology();
        let store = ontology.individuals();
        let classifier = session.classifier();
        let dominant = classifier.dominant_type(individual);
        let bucket = classifier.bucket_for(dominant);

        let resolved = store.resolve(individual);
        let (relations, details): (Vec<&ResolvedAssertion>, Vec<&ResolvedAssertion>) = resolved
            .iter()
            .partition(|r| r.target.is_some() || ontology.is_object_property(&r.assertion.property));
        let referrers = store.referrers(&individual.name);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "id": individual.name,
                "name": individual.display_name(),
                "uri": individual.uri,
                "types": individual.types,
                "dominant_type": dominant,
                "bucket": bucket,
                "assertions": details
                    .iter()
                    .map(|r| json!({
                        "property": r.assertion.property,
                        "value": r.assertion.value,
                        "display": present_value(&r.assertion.property, &r.assertion.value),
                    }))
                    .collect::<Vec<_>>(),
                "relations": relations
                    .iter()
                    .map(|r| json!({
                        "property": r.assertion.property,
                        "target": r.assertion.value,
                        "resolved": r.target.is_some(),
                        "bucket": r.target.map(|t| classifier.bucket_of(t)),
                    }))
                    .collect::<Vec<_>>(),
                "referrers": referrers
                    .iter()
                    .map(|r| json!({ "id": r.source.name, "property": r.property }))
                    .collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => Ok(individual.name.clone()),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.colorize(individual.display_name(), "yellow"));
                out.push('\n');
                out.push_str(&format!("  id     {}\n", individual.name));
                out.push_str(&format!("  uri    {}\n", individual.uri));
                let types = if individual.types.is_empty() {
                    UNKNOWN.to_string()
                } else {
                    individual.types.join(", ")
                };
                out.push_str(&format!("  types  {}\n", types));
                out.push_str(&format!("  shown  {} in {}\n", dominant, bucket));
                if let Some(stars) = individual.first_value("rating").and_then(star_rating) {
                    out.push_str(&format!("  {}\n", self.colorize(&stars, "yellow")));
                }

                let details: Vec<&Assertion> = details
                    .iter()
                    .map(|r| r.assertion)
                    .filter(|a| a.property != NAME_PROPERTY && a.property != "rating")
                    .collect();
                if !details.is_empty() {
                    out.push('\n');
                    out.push_str(&self.heading("DETAILS"));
                    out.push('\n');
                    out.push_str(&table(
                        &["Property", "Value"],
                        by_property(details.into_iter()).into_iter().map(|(property, values)| {
                            let shown: Vec<String> = values
                                .iter()
                                .map(|v| present_value(property, v))
                                .collect();
                            vec![property.to_string(), shown.join(", ")]
                        }),
                    ));
                    out.push('\n');
                }

                if !relations.is_empty() {
                    out.push('\n');
                    out.push_str(&self.heading("RELATIONS"));
                    out.push('\n');
                    out.push_str(&table(
                        &["Property", "Target", "Bucket"],
                        relations.iter().map(|r| match r.target {
                            Some(target) => vec![
                                r.assertion.property.clone(),
                                format!("{} ({})", target.display_name(), target.name),
                                classifier.bucket_of(target).to_string(),
                            ],
                            None => vec![
                                r.assertion.property.clone(),
                                format!("{} (unresolved)", r.assertion.value),
                                UNKNOWN.to_string(),
                            ],
                        }),
                    ));
                    out.push('\n');
                }

                if !referrers.is_empty() {
                    out.push('\n');
                    out.push_str(&self.heading("REFERENCED BY"));
                    out.push('\n');
                    out.push_str(&table(
                        &["Individual", "Property"],
                        referrers.iter().map(|r| {
                            vec![
                                format!("{} ({})", r.source.display_name(), r.source.name),
                                r.property.to_string(),
                            ]
                        }),
                    ));
                    out.push('\n');
                }

                Ok(out.trim_end().to_string())
            }
        }
    }

    /// Query matches with their dominant type.
    pub fn query_results(
        &self,
        query: &Query,
        matches: &[&Individual],
        classifier: &Classifier,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "query": query.to_string(),
                "kind": query.kind(),
                "count": matches.len(),
                "matches": matches
                    .iter()
                    .map(|i| member_json(i, classifier))
                    .collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => Ok(matches
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let count = format!(
                    "{} result{}",
                    matches.len(),
                    if matches.len() == 1 { "" } else { "s" }
                );
                if matches.is_empty() {
                    return Ok(self.warning(&count));
                }
                let rows = matches.iter().map(|i| {
                    vec![
                        i.name.clone(),
                        i.display_name().to_string(),
                        classifier.dominant_type(i).to_string(),
                    ]
                });
                Ok(format!("{}\n{}", self.info(&count), table(&["ID", "Name", "Type"], rows)))
            }
        }
    }

    /// The query guide.
    pub fn guide(&self, examples: &[Example]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = examples
                    .iter()
                    .map(|e| json!({ "query": e.query, "description": e.description }))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(examples
                .iter()
                .map(|e| e.query)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(table(
                &["Query", "Finds"],
                examples
                    .iter()
                    .map(|e| vec![e.query.to_string(), e.description.to_string()]),
            )),
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn table<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    builder.push_record(header.iter().copied());
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn member_json(individual: &Individual, classifier: &Classifier) -> serde_json::Value {
    json!({
        "id": individual.name,
        "name": individual.display_name(),
        "type": classifier.dominant_type(individual),
        "bucket": classifier.bucket_of(individual),
    })
}

/// Group assertion values by property, properties in first-appearance order.
fn by_property<'a>(assertions: impl Iterator<Item = &'a Assertion>) -> Vec<(&'a str, Vec<&'a str>)> {
    let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();
    for assertion in assertions {
        match grouped.iter_mut().find(|(p, _)| *p == assertion.property) {
            Some((_, values)) => values.push(assertion.value.as_str()),
            None => grouped.push((assertion.property.as_str(), vec![assertion.value.as_str()])),
        }
    }
    grouped
}

/// Five-star rendering with a half star, followed by the value to one decimal.
///
/// `None` when the value is not a finite number.
pub fn star_rating(value: &str) -> Option<String> {
    let rating: f64 = value.trim().parse().ok()?;
    if !rating.is_finite() {
        return None;
    }

    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let half = usize::from(full < 5 && clamped - full as f64 >= 0.25);
    let empty = 5 - full - half;
    Some(format!(
        "{}{}{}  {:.1}",
        "★".repeat(full),
        "½".repeat(half),
        "☆".repeat(empty),
        rating
    ))
}

/// Human-friendly rendering of well-known properties.
///
/// Unknown properties, and values that do not fit the property's shape, are
/// shown as written.
pub fn present_value(property: &str, value: &str) -> String {
    let truthy = value.eq_ignore_ascii_case("true");
    let flag = |yes: &str, no: &str| (if truthy { yes } else { no }).to_string();

    match property {
        "price" => value
            .parse::<f64>()
            .map(|price| format!("${:.2}", price))
            .unwrap_or_else(|_| value.to_string()),
        "rating" => star_rating(value).unwrap_or_else(|| value.to_string()),
        "calories" => format!("{} kcal", value),
        "isVegan" => flag("✓ Vegan", "✗ Not Vegan"),
        "confirmed" => flag("✓ Confirmed", "⚑ Pending"),
        "seasonal" => flag("✦ Seasonal", "● Year-round"),
        "reservationDate" => value.replace('T', "  ·  "),
        "yearsExperience" => format!("{} years", value),
        "partySize" => format!("Party of {}", value),
        _ => value.to_string(),
    }
}
