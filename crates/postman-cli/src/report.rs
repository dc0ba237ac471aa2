//! Failure report printed before exiting

use crate::error::CliError;
use std::io::{self, Write};

/// Write the error and the troubleshooting hints for `base_url`
pub fn write_failure(out: &mut impl Write, base_url: &str, err: &CliError) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    writeln!(out)?;
    writeln!(out, "Make sure:")?;
    writeln!(out, "   1. The server is running at {}", base_url)?;
    writeln!(out, "   2. Swagger/OpenAPI is enabled")?;
    writeln!(out, "   3. The /api-docs endpoint is accessible")?;
    Ok(())
}
