//! Simple command that prints sequential GUID strings in a chosen textual layout

use seqguid::Format;
use std::{env, io, io::Write, process::ExitCode};

struct Options {
    count: usize,
    format: Format,
}

fn main() -> io::Result<ExitCode> {
    let options = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(options) => options,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [--format hyphenated|simple|braced|parenthesized]",
                    program.as_deref().unwrap_or("seqguid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..options.count {
        let guid = seqguid::sequential_guid();
        writeln!(buf, "{}", guid.encode_format(options.format))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut format = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                let value = next_value(&mut args, &arg)?;
                let c = value
                    .parse()
                    .map_err(|_| format!("invalid argument to option 'n': '{}'", value))?;
                if count.replace(c).is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
            }
            "--format" => {
                let value = next_value(&mut args, &arg)?;
                let f = parse_format(&value)
                    .ok_or_else(|| format!("unknown format: '{}'", value))?;
                if format.replace(f).is_some() {
                    return Err("option 'format' given more than once".to_owned());
                }
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(Options {
        count: count.unwrap_or(1),
        format: format.unwrap_or(Format::Hyphenated),
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, arg: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("argument to option '{}' missing", arg))
}

fn parse_format(name: &str) -> Option<Format> {
    match name {
        "hyphenated" => Some(Format::Hyphenated),
        "simple" => Some(Format::Simple),
        "braced" => Some(Format::Braced),
        "parenthesized" => Some(Format::Parenthesized),
        _ => None,
    }
}
