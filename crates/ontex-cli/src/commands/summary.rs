//! Summary command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the summary command.
pub fn execute_summary(session: &Session, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.summary(session)?);
    Ok(())
}
