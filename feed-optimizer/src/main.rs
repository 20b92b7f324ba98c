use std::io::{self, BufRead, BufWriter, Write};

use feed_optimizer::{Error, Result, Session};

fn parse_header(line: &str) -> Result<(usize, u64, u32)> {
    let mut fields = line.split_whitespace();
    let n = fields
        .next()
        .ok_or(Error::MissingField {
            command: "header",
            field: "N",
        })?
        .parse()?;
    let time_window = fields
        .next()
        .ok_or(Error::MissingField {
            command: "header",
            field: "T",
        })?
        .parse()?;
    let browser_height = fields
        .next()
        .ok_or(Error::MissingField {
            command: "header",
            field: "H",
        })?
        .parse()?;
    Ok((n, time_window, browser_height))
}

fn run_command(session: &mut Session, line: &str) -> Result<Option<String>> {
    let mut fields = line.split_whitespace();
    let verb = fields.next().ok_or_else(|| Error::UnknownCommand(line.to_string()))?;
    match verb {
        "S" => {
            let time = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "S",
                    field: "time",
                })?
                .parse()?;
            let score = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "S",
                    field: "score",
                })?
                .parse()?;
            let height = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "S",
                    field: "height",
                })?
                .parse()?;
            session.add_story(time, score, height);
            Ok(None)
        }
        "R" => {
            let time = fields
                .next()
                .ok_or(Error::MissingField {
                    command: "R",
                    field: "time",
                })?
                .parse()?;
            let feed = session.refresh(time)?;
            Ok(Some(feed.format()))
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
    let header = lines
        .next()
        .ok_or(Error::UnexpectedEof {
            expected: 1,
            got: 0,
        })??;
    let (n, time_window, browser_height) = parse_header(&header)?;

    let mut session = Session::new(time_window, browser_height);

    for i in 0..n {
        let line = lines
            .next()
            .ok_or(Error::UnexpectedEof {
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
