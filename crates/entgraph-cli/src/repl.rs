//! Line-oriented read/execute/print loop.

use std::io::{self, BufRead, Write};

use entgraph_kernel::Interpreter;

pub const BANNER: &str = "Welcome to entgraph.  Enter input:";

pub fn write_banner(mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{BANNER}")?;
    writer.flush()
}

/// Feed `reader` to `interpreter` one line at a time until `exit` or EOF.
///
/// Each result's text, output or `Error: ...`, goes to `writer` followed by
/// a newline. Bytes that are not UTF-8 are replaced, not rejected. Read and
/// write failures end the loop with an error.
pub fn run_repl(
    interpreter: &mut Interpreter,
    mut reader: impl BufRead,
    mut writer: impl Write,
    prompt: &str,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("end of input");
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let result = interpreter.execute(strip_line_ending(&line));
        if result.exit {
            return Ok(());
        }
        writeln!(writer, "{}", result.text())?;
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
