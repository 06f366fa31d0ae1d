//! Command registry behind the `uniq` binary.
//!
//! The registry is built from a static table of [`CommandSpec`] entries.
//! Each entry names a subcommand and points at a plain handler function
//! that calls into the generators and returns the identifier to print.

use crate::{UniqError, base32_id, hex_id, isodate, isonan, isosec, isosect, second, uuid_v4};

/// Copyright line printed by `uniq --version`.
pub const COPYRIGHT: &str = "Copyright 2021 Robert S Muhlestein";

/// Handler invoked with the arguments following the subcommand name.
pub type Handler = fn(&[String]) -> Result<String, UniqError>;

/// Number of positional arguments a subcommand takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    One,
}

impl Arity {
    fn count(self) -> usize {
        match self {
            Self::None => 0,
            Self::One => 1,
        }
    }
}

/// Static description of one subcommand.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub arity: Arity,
    pub handler: Handler,
}

/// What the binary should print after a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A generated identifier (possibly empty on entropy failure).
    Print(String),
    Help(String),
    Version(String),
}

fn run_isosec(_: &[String]) -> Result<String, UniqError> {
    Ok(isosec())
}

fn run_isosect(_: &[String]) -> Result<String, UniqError> {
    Ok(isosect())
}

fn run_isonan(_: &[String]) -> Result<String, UniqError> {
    Ok(isonan())
}

fn run_isodate(_: &[String]) -> Result<String, UniqError> {
    Ok(isodate())
}

fn run_second(_: &[String]) -> Result<String, UniqError> {
    Ok(second())
}

fn run_uuid(_: &[String]) -> Result<String, UniqError> {
    Ok(uuid_v4())
}

fn run_base32(_: &[String]) -> Result<String, UniqError> {
    Ok(base32_id())
}

fn run_hex(args: &[String]) -> Result<String, UniqError> {
    let raw = args
        .first()
        .ok_or_else(|| UniqError::InvalidArgument("hex requires a length".to_string()))?;
    let n = parse_length(raw)?;
    Ok(hex_id(n))
}

fn parse_length(raw: &str) -> Result<usize, UniqError> {
    raw.parse::<usize>().map_err(|_| {
        UniqError::InvalidArgument(format!("length must be a non-negative integer, got {raw:?}"))
    })
}

/// Built-in subcommands.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "isosec",
        summary: "sortable unique second in UTC",
        usage: "isosec",
        description: "Prints the current UTC second as YYYYMMDDHHMMSS: fourteen digits,\n\
no punctuation and no T. Sorts chronologically and reads more easily\n\
than the epoch (see second).",
        arity: Arity::None,
        handler: run_isosec,
    },
    CommandSpec {
        name: "isosect",
        summary: "sortable unique second in UTC with T",
        usage: "isosect",
        description: "Prints the current UTC second as YYYYMMDDTHHMMSS: the isosec digits\n\
with the T kept between date and time.",
        arity: Arity::None,
        handler: run_isosect,
    },
    CommandSpec {
        name: "isonan",
        summary: "sortable unique nanosecond in UTC",
        usage: "isonan",
        description: "Prints the current UTC instant as YYYYMMDDHHMMSS followed by nine\n\
fractional digits. Far less likely to repeat than isosec.",
        arity: Arity::None,
        handler: run_isonan,
    },
    CommandSpec {
        name: "isodate",
        summary: "human readable second in UTC (RFC 3339)",
        usage: "isodate",
        description: "Prints the current UTC second in RFC 3339 form,\n\
e.g. 2021-03-04T15:04:05Z.",
        arity: Arity::None,
        handler: run_isodate,
    },
    CommandSpec {
        name: "hex",
        summary: "random bytes as hexadecimal",
        usage: "hex <length>",
        description: "Prints <length> random bytes as 2*<length> lowercase hex characters.\n\
Useful where validators accept only hexadecimal; hex 18 fills the same\n\
36 characters as a UUID. Prints an empty line if random data cannot be read.",
        arity: Arity::One,
        handler: run_hex,
    },
    CommandSpec {
        name: "second",
        summary: "UNIX second since epoch",
        usage: "second",
        description: "Prints the seconds elapsed since 1970-01-01T00:00:00Z in decimal.",
        arity: Arity::None,
        handler: run_second,
    },
    CommandSpec {
        name: "uuid",
        summary: "standard UUID v4 (RFC 4122)",
        usage: "uuid",
        description: "Prints a random RFC 4122 version 4 UUID in lowercase hyphenated form.\n\
Carries 122 random bits; base32 carries more. Prints an empty line if\n\
random data cannot be read.",
        arity: Arity::None,
        handler: run_uuid,
    },
    CommandSpec {
        name: "base32",
        summary: "base32 20 byte unique identifier",
        usage: "base32",
        description: "Prints 20 random bytes as 32 uppercase Base32 characters (A-Z, 2-7)\n\
without padding. Safe in file names and carries 160 random bits.\n\
Prints an empty line if random data cannot be read.",
        arity: Arity::None,
        handler: run_base32,
    },
];

/// Subcommand lookup and dispatch.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Build a registry from a table of subcommands.
    pub fn new(commands: &[CommandSpec]) -> Self {
        Self {
            commands: commands.to_vec(),
        }
    }

    /// Registry holding the built-in subcommands.
    pub fn builtin() -> Self {
        Self::new(COMMANDS)
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Top-level help listing every subcommand with its summary.
    pub fn help(&self) -> String {
        let width = self.commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
        let mut out = String::from(
            "uniq - universal unique identifiers\n\n\
Usage:\n  uniq <command> [args]\n  uniq help <command>\n  uniq --version\n\nCommands:\n",
        );
        for c in &self.commands {
            out.push_str(&format!("  {:width$}  {}\n", c.name, c.summary, width = width));
        }
        out.push_str(&format!(
            "  {:width$}  {}",
            "help",
            "show this help or a command's help",
            width = width
        ));
        out
    }

    /// Usage and long description of one subcommand.
    pub fn command_help(&self, name: &str) -> Result<String, UniqError> {
        let c = self
            .find(name)
            .ok_or_else(|| UniqError::UnknownCommand(name.to_string()))?;
        Ok(format!(
            "uniq {} - {}\n\nUsage:\n  uniq {}\n\n{}",
            c.name, c.summary, c.usage, c.description
        ))
    }

    /// Name, version, copyright and license.
    pub fn version(&self) -> String {
        format!(
            "uniq v{}\n{}\nLicense {}",
            env!("CARGO_PKG_VERSION"),
            COPYRIGHT,
            env!("CARGO_PKG_LICENSE")
        )
    }

    /// Route `args` (without the program name) to a subcommand.
    pub fn dispatch(&self, args: &[String]) -> Result<Outcome, UniqError> {
        let Some((cmd, rest)) = args.split_first() else {
            return Ok(Outcome::Help(self.help()));
        };

        match cmd.as_str() {
            "-h" | "--help" | "help" => {
                return match rest.first() {
                    Some(name) => self.command_help(name).map(Outcome::Help),
                    None => Ok(Outcome::Help(self.help())),
                };
            }
            "-V" | "--version" | "version" => return Ok(Outcome::Version(self.version())),
            _ => {}
        }

        let spec = self
            .find(cmd)
            .ok_or_else(|| UniqError::UnknownCommand(cmd.clone()))?;

        if rest.iter().any(|a| a == "-h" || a == "--help") {
            return self.command_help(spec.name).map(Outcome::Help);
        }

        let want = spec.arity.count();
        if rest.len() != want {
            return Err(UniqError::InvalidArgument(format!(
                "{} takes {} argument(s), got {} (usage: uniq {})",
                spec.name,
                want,
                rest.len(),
                spec.usage
            )));
        }

        tracing::debug!(command = spec.name, "dispatching");
        (spec.handler)(rest).map(Outcome::Print)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
