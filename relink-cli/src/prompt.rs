//! Interactive confirmation before replacing an existing output file.

use std::io::{self, BufRead, Write};

/// Ask whether `path` may be overwritten.
///
/// Only an answer of `y` (any case, surrounding whitespace ignored) confirms. End of input counts
/// as a refusal.
pub fn confirm_overwrite<R, W>(path: &str, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "The file '{path}' already exists. Overwrite? (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
