use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{arg, command, value_parser};
use dgrep::Dfa;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "debug-logs")]
    env_logger::init();

    let args = command!()
        .about("Print lines containing a match for a pattern")
        .arg(arg!(<PATTERN> "Pattern to search for"))
        .arg(
            arg!([FILE] "File to search; reads standard input when omitted")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let pattern = args.get_one::<String>("PATTERN").unwrap();
    let dfa = dgrep::compile(pattern.as_bytes())
        .with_context(|| format!("cannot compile pattern `{pattern}`"))?;

    match args.get_one::<PathBuf>("FILE") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open `{}`", path.display()))?;
            filter_lines(&dfa, BufReader::new(file))
        }
        None => filter_lines(&dfa, io::stdin().lock()),
    }
}

/// Copy every matching line of `reader` to stdout, in input order.
///
/// Lines are handled as raw bytes; the trailing `\n` (or `\r\n`) is not
/// part of the line handed to the matcher.
fn filter_lines(dfa: &Dfa, mut reader: impl BufRead) -> anyhow::Result<()> {
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    let mut buffer = Vec::new();

    while reader.read_until(b'\n', &mut buffer)? > 0 {
        let mut line = buffer.as_slice();
        if line.ends_with(b"\n") {
            line = &line[..line.len() - 1];
        }
        if line.ends_with(b"\r") {
            line = &line[..line.len() - 1];
        }

        if dgrep::line_contains_match(dfa, line) {
            stdout.write_all(line)?;
            stdout.write_all(b"\n")?;
        }
        buffer.clear();
    }

    stdout.flush()?;
    Ok(())
}
