#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use anyhow::{Context, bail};
use clap::Parser;
use config::{CliArgs, Config};
use ferrocuid::{Components, Cuid, Guid, Identifier};
use std::io::{self, BufWriter, Write};
use telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_tracing()?;
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match config {
        Config::Cuid { count } => {
            for _ in 0..*count {
                writeln!(out, "{}", ferrocuid::cuid()?)?;
            }
        }
        Config::Guid { prefix, count } => {
            if let Some(prefix) = prefix {
                let &[b1, b2] = prefix.as_bytes() else {
                    bail!("guid prefix must be 2 characters, got {prefix}");
                };
                ferrocuid::set_prefix_bytes(b1, b2)?;
            }
            for _ in 0..*count {
                writeln!(out, "{}", ferrocuid::guid()?)?;
            }
        }
        Config::Parse { id } => describe(id, out)?,
        Config::Slug { cuid } => writeln!(out, "{}", cuid.slug())?,
    }
    Ok(())
}

/// Prints the family and fields of `text`, choosing the family by length.
fn describe(text: &str, out: &mut impl Write) -> anyhow::Result<()> {
    match text.len() {
        len if len == Cuid::WIDTH => {
            let id: Cuid = text.parse().context("not a valid cuid")?;
            write_fields(&id, out)?;
            writeln!(out, "slug:        {}", id.slug())?;
        }
        len if len == Guid::WIDTH => {
            let id: Guid = text.parse().context("not a valid guid")?;
            write_fields(&id, out)?;
        }
        len => bail!(
            "expected {} (cuid) or {} (guid) characters, got {len}",
            Cuid::WIDTH,
            Guid::WIDTH
        ),
    }
    Ok(())
}

fn write_fields<ID: Identifier>(id: &ID, out: &mut impl Write) -> io::Result<()> {
    let Components {
        timestamp,
        fingerprint,
        counters,
        random,
    } = id.components();

    writeln!(out, "family:      {}", ID::NAME)?;
    writeln!(out, "prefix:      {}", String::from_utf8_lossy(id.prefix()))?;
    writeln!(out, "timestamp:   {timestamp}")?;
    writeln!(out, "fingerprint: {fingerprint}")?;
    for (i, counter) in counters.iter().take(ID::COUNTERS.len()).enumerate() {
        writeln!(out, "counter[{i}]:  {counter}")?;
    }
    for (i, value) in random.iter().take(ID::RANDOM_FIELDS).enumerate() {
        writeln!(out, "random[{i}]:   {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(config: &Config) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn cuid_prints_count_lines() {
        let text = output(&Config::Cuid { count: 3 }).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(Cuid::is_valid(line), "{line}");
        }
    }

    #[test]
    fn parse_guid_fields() {
        let text = output(&Config::Parse {
            id: "test0test0test0test0test00".to_owned(),
        })
        .unwrap();
        assert_eq!(
            text,
            "family:      guid\n\
             prefix:      te\n\
             timestamp:   2257372681812\n\
             fingerprint: 1372205\n\
             counter[0]:  38116\n\
             counter[1]:  1354082\n\
             random[0]:   1343952\n"
        );
    }

    #[test]
    fn parse_cuid_fields() {
        let text = output(&Config::Parse {
            id: "ckjdigao0001600yalflr0007".to_owned(),
        })
        .unwrap();
        assert!(text.starts_with("family:      cuid\nprefix:      c\n"));
        assert!(text.contains("timestamp:   1609459200000\n"));
        assert!(text.contains("counter[0]:  42\n"));
        assert!(!text.contains("counter[1]"));
        assert!(text.contains("random[1]:   7\n"));
        assert!(text.ends_with("slug:        o016yalr\n"));
    }

    #[test]
    fn parse_rejects_other_lengths() {
        let err = output(&Config::Parse {
            id: "c123".to_owned(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("got 4"), "{err}");
    }

    #[test]
    fn slug_prints_one_line() {
        let cuid = "ckjdigao0001600yalflr0007".parse().unwrap();
        assert_eq!(output(&Config::Slug { cuid }).unwrap(), "o016yalr\n");
    }
}
