//! Guide command implementation.

use crate::error::Result;
use crate::output::Formatter;
use ontex_query::guide::EXAMPLES;

/// Execute the guide command.
pub fn execute_guide(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.guide(EXAMPLES)?);
    Ok(())
}
