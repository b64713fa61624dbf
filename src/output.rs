//! Console rendering of the greeting reply.

use std::io::{self, Write};

/// Fixed label placed before the reply message
pub const GREETING_PREFIX: &str = "From server: ";

/// Write the reply as a single line, verbatim after the prefix
pub fn render_greeting<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", GREETING_PREFIX, message)?;
    out.flush()
}
