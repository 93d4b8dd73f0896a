use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use ferrocuid::{Cuid, Prefix};

/// Largest number of identifiers a single invocation may print.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `ferrocuid` binary.
///
/// Counts and the Guid prefix can also be supplied through environment
/// variables (or a `.env` file), which is convenient in scripts.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ferrocuid",
    version,
    about = "Generate and inspect collision-resistant base36 identifiers"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print new 25-character Cuids, one per line.
    Cuid {
        /// Number of identifiers to print.
        ///
        /// Environment variable: `FERROCUID_COUNT`
        #[arg(short = 'n', long, env = "FERROCUID_COUNT", default_value_t = 1)]
        count: usize,
    },

    /// Print new 26-character Guids, one per line.
    Guid {
        /// Two-character prefix in `[0-9a-z]`. Defaults to `nw`.
        ///
        /// Environment variable: `FERROCUID_PREFIX`
        #[arg(short, long, env = "FERROCUID_PREFIX")]
        prefix: Option<String>,

        /// Number of identifiers to print.
        ///
        /// Environment variable: `FERROCUID_COUNT`
        #[arg(short = 'n', long, env = "FERROCUID_COUNT", default_value_t = 1)]
        count: usize,
    },

    /// Decode a Cuid or Guid and print its fields.
    Parse {
        /// The identifier text. The family is chosen by length.
        id: String,
    },

    /// Print the short slug of a Cuid.
    Slug {
        /// The Cuid text.
        cuid: String,
    },
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Cuid { count: usize },
    Guid { prefix: Option<Prefix>, count: usize },
    Parse { id: String },
    Slug { cuid: Cuid },
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        Ok(match args.command {
            Command::Cuid { count } => Self::Cuid {
                count: check_count(count)?,
            },
            Command::Guid { prefix, count } => Self::Guid {
                prefix: prefix.as_deref().map(parse_prefix).transpose()?,
                count: check_count(count)?,
            },
            Command::Parse { id } => Self::Parse { id },
            Command::Slug { cuid } => Self::Slug {
                cuid: cuid
                    .parse()
                    .with_context(|| format!("{cuid:?} is not a valid cuid"))?,
            },
        })
    }
}

fn check_count(count: usize) -> anyhow::Result<usize> {
    if count == 0 {
        bail!("count (--count / FERROCUID_COUNT) must be greater than 0");
    }
    if count > MAX_COUNT {
        bail!("count (--count / FERROCUID_COUNT) of {count} exceeds the maximum of {MAX_COUNT}");
    }
    Ok(count)
}

fn parse_prefix(text: &str) -> anyhow::Result<Prefix> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        bail!("prefix (--prefix / FERROCUID_PREFIX) must be exactly 2 characters, got {text:?}");
    }
    Prefix::new(bytes[0], bytes[1])
        .with_context(|| format!("invalid prefix (--prefix / FERROCUID_PREFIX) {text:?}"))
}
