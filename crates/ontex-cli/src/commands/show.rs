//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let individual = session
        .ontology()
        .individuals()
        .get(&args.id)
        .ok_or_else(|| CliError::NotFound(format!("individual '{}'", args.id)))?;

    println!("{}", formatter.individual(session, individual)?);
    Ok(())
}
