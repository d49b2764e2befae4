//! Groups command implementation.

use crate::cli::GroupsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the groups command.
pub fn execute_groups(args: GroupsArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let classifier = session.classifier();
    let grouping = classifier.group(session.ontology().individuals());

    let grouping = match args.bucket {
        None => grouping,
        Some(bucket) => {
            if !classifier
                .bucket_names()
                .any(|name| name.eq_ignore_ascii_case(&bucket))
            {
                let known: Vec<&str> = classifier.bucket_names().collect();
                return Err(CliError::NotFound(format!(
                    "bucket '{}' (known buckets: {})",
                    bucket,
                    known.join(", ")
                )));
            }
            grouping.select(&bucket)
        }
    };

    println!("{}", formatter.groups(&grouping, classifier)?);
    Ok(())
}
