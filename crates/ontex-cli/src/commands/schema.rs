//! Schema command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the schema command.
pub fn execute_schema(session: &Session, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.schema(session.ontology())?);
    Ok(())
}
