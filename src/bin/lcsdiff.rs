//! Command-line unified diff.
//!
//! ```text
//! lcsdiff [hm|hs|kc|kcmod] FILE1 FILE2 [CONTEXT]
//! ```
//!
//! `-` reads standard input. The algorithm token may sit anywhere among
//! the arguments; when several are given, the first in the order above
//! wins. Output follows `diff -u`, including silence for identical
//! inputs. Exits 2 on unusable arguments or unreadable files.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use log::debug;

use lcsdiff::lcs::Algorithm;
use lcsdiff::{unified, Error, Result};

fn main() -> ExitCode {
    env_logger::init();
    let mut args: Vec<String> = env::args().skip(1).collect();
    let algo = extract_algorithm(&mut args);
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: lcsdiff [hm|hs|kc|kcmod] FILE1 FILE2 [CONTEXT]");
        return ExitCode::from(2);
    }
    match run(algo, &args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("lcsdiff: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(algo: Algorithm, args: &[String]) -> Result<String> {
    let context = match args.get(2) {
        Some(raw) => parse_context(raw)?,
        None => unified::CONTEXT,
    };
    let input_a = read_input(&args[0])?;
    let input_b = read_input(&args[1])?;
    let lines_a: Vec<&str> = input_a.text.lines().collect();
    let lines_b: Vec<&str> = input_b.text.lines().collect();

    debug!(
        "{algo}: {} vs {} lines, context {context}",
        lines_a.len(),
        lines_b.len()
    );
    let matches = algo.lcs(&lines_a, &lines_b);
    let hunks = unified::hunks(&lines_a, &lines_b, &matches, context);
    if hunks.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();
    out.push_str(&header("---", &args[0], input_a.mtime));
    out.push_str(&header("+++", &args[1], input_b.mtime));
    for hunk in &hunks {
        out.push_str(&hunk.to_string());
    }
    Ok(out)
}

/// Pulls algorithm tokens out of the argument list, leaving only paths
/// and the context count behind. The first token in [`Algorithm::ALL`]
/// order decides; absent any token the default engine runs.
fn extract_algorithm(args: &mut Vec<String>) -> Algorithm {
    let picked = Algorithm::ALL
        .into_iter()
        .find(|algo| args.iter().any(|arg| arg == algo.name()))
        .unwrap_or_default();
    args.retain(|arg| Algorithm::ALL.iter().all(|algo| arg != algo.name()));
    picked
}

fn parse_context(raw: &str) -> Result<usize> {
    raw.parse().map_err(|_| Error::BadContext(raw.to_string()))
}

struct Input {
    text: String,
    mtime: SystemTime,
}

/// Reads a file, or standard input when the path is `-`; stdin has no
/// timestamp of its own, so it is stamped with the current time.
fn read_input(path: &str) -> Result<Input> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| Error::Io {
                path: path.to_string(),
                source,
            })?;
        return Ok(Input {
            text,
            mtime: SystemTime::now(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    let mtime = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| Error::Io {
            path: path.to_string(),
            source,
        })?;
    Ok(Input { text, mtime })
}

/// One `---`/`+++` header line: path, a tab, then the timestamp with
/// nanosecond precision in the local zone, the way GNU diff prints it.
fn header(tag: &str, path: &str, mtime: SystemTime) -> String {
    let stamp: DateTime<Local> = mtime.into();
    format!("{tag} {path}\t{}\n", stamp.format("%Y-%m-%d %H:%M:%S%.9f %z"))
}
