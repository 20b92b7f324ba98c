use std::collections::HashMap;
use std::io::{self, BufRead, BufWriter, Write};

use typeahead_search::{BoostKey, Error, EntryType, Result, Session};

/// Splits `line` into at most `limit` whitespace-delimited fields, with the
/// last field left as the untouched remainder of the line (so embedded
/// records preserve internal spacing verbatim).
fn split_limited(line: &str, limit: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(limit);
    let mut rest = line;
    for _ in 1..limit {
        rest = rest.trim_start();
        match rest.find(char::is_whitespace) {
            Some(pos) => {
                fields.push(&rest[..pos]);
                rest = &rest[pos..];
            }
            None => break,
        }
    }
    let tail = rest.trim_start();
    fields.push(tail);
    fields
}

fn parse_boost(field: &str) -> Result<(BoostKey, f64)> {
    let (key, factor) = field
        .split_once(':')
        .ok_or_else(|| Error::MalformedBoost(field.to_string()))?;
    let factor: f64 = factor.parse()?;
    let key = match key.parse::<EntryType>() {
        Ok(kind) => BoostKey::Type(kind),
        Err(_) => BoostKey::Id(key.to_string()),
    };
    Ok((key, factor))
}

fn run_command(session: &mut Session, line: &str) -> Result<Option<String>> {
    let mut fields = line.split_whitespace();
    let verb = fields
        .next()
        .ok_or_else(|| Error::UnknownCommand(line.to_string()))?;

    match verb {
        "ADD" => {
            let rest = line.splitn(2, char::is_whitespace).nth(1).unwrap_or("");
            let parts = split_limited(rest, 4);
            let kind = parts
                .first()
                .ok_or(Error::MissingField {
                    command: "ADD",
                    field: "type",
                })?
                .parse()?;
            let id = parts
                .get(1)
                .ok_or(Error::MissingField {
                    command: "ADD",
                    field: "id",
                })?
                .to_string();
            let score: f64 = parts
                .get(2)
                .ok_or(Error::MissingField {
                    command: "ADD",
                    field: "score",
                })?
                .parse()?;
            let data = parts.get(3).copied().unwrap_or("").to_string();
            session.add(kind, id, score, data);
            Ok(None)
        }
        "DEL" => {
            let id = fields.next().ok_or(Error::MissingField {
                command: "DEL",
                field: "id",
            })?;
            session.delete(id);
            Ok(None)
        }
        "QUERY" => {
            let k: usize = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "QUERY",
                    field: "k",
                })?
                .parse()?;
            let prefixes: Vec<String> = fields.map(str::to_string).collect();
            let ids = session.query(k, &prefixes);
            Ok(Some(ids.join(" ")))
        }
        "WQUERY" => {
            let k: usize = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "WQUERY",
                    field: "k",
                })?
                .parse()?;
            let boost_count: usize = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "WQUERY",
                    field: "b",
                })?
                .parse()?;

            let mut boosts: HashMap<BoostKey, f64> = HashMap::new();
            for _ in 0..boost_count {
                let field = fields.next().ok_or(Error::MissingField {
                    command: "WQUERY",
                    field: "boost",
                })?;
                let (key, factor) = parse_boost(field)?;
                boosts
                    .entry(key)
                    .and_modify(|existing| *existing *= factor)
                    .or_insert(factor);
            }

            let prefixes: Vec<String> = fields.map(str::to_string).collect();
            let ids = session.wquery(k, &boosts, &prefixes);
            Ok(Some(ids.join(" ")))
        }
        _ => Err(Error::UnknownCommand(line.to_string())),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut lines = stdin.lock().lines();
    let header = lines.next().ok_or(Error::UnexpectedEof {
        expected: 1,
        got: 0,
    })??;
    let n: usize = header.trim().parse()?;

    let mut session = Session::new();

    for i in 0..n {
        let line = lines.next().ok_or(Error::UnexpectedEof {
            expected: n,
            got: i,
        })??;
        if let Some(result) = run_command(&mut session, &line)? {
            writeln!(out, "{result}")?;
        }
    }

    out.flush()?;
    Ok(())
}
