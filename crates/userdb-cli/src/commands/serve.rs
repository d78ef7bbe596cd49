//! Line-delimited JSON tool server
//!
//! Usage: userdb serve
//!
//! Reads one request per line from stdin and writes exactly one envelope
//! line per request to stdout, in order. Blank lines are ignored. A line
//! that is not UTF-8 or not a request object gets an error envelope and
//! the session carries on; it ends at EOF or on an I/O error.

use std::io::{self, BufRead, Write};

use userdb_engine::{invoke_line, reject_input};
use userdb_store::UserStore;

pub fn execute(store: &UserStore) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_lines(store, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn serve_lines(store: &UserStore, input: impl BufRead, mut output: impl Write) -> io::Result<usize> {
    tracing::info!(db_path = %store.path().display(), "serving tool requests on stdin");
    let mut handled = 0;

    for raw in input.split(b'\n') {
        let raw = raw?;
        let envelope = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => invoke_line(store, line.trim()),
            Err(e) => reject_input(format!("Request is not valid UTF-8: {}", e)),
        };

        writeln!(output, "{}", envelope.to_json_line())?;
        output.flush()?;
        handled += 1;
    }

    tracing::info!(requests = handled, "stdin closed, session finished");
    Ok(handled)
}
