//! Query command implementation.

use crate::cli::QueryArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use ontex_query::Query;

/// Execute the query command.
pub fn execute_query(args: QueryArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let query = Query::parse(&args.query());
    let matches = session.engine().run(&query, session.ontology().individuals());

    println!(
        "{}",
        formatter.query_results(&query, &matches, session.classifier())?
    );
    Ok(())
}
