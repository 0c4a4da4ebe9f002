use crate::{error::ToolError, option::Option6rd};
use clap::{ArgGroup, Parser, ValueEnum};
use std::{env, fs, net::Ipv4Addr, path::PathBuf};

/// Variable dhclient exports to its exit hooks for the `option-6rd` declaration.
pub const DHCLIENT_OPTION_VAR: &str = "new_option_6rd";
/// Variable dhclient exports to its exit hooks with the leased address.
pub const DHCLIENT_ADDRESS_VAR: &str = "new_ip_address";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["option", "hex", "file", "from_env"])
))]
pub struct Args {
    /// dhclient-formatted option value, e.g. '0 32 2001:db8:: 192.0.2.1'
    #[arg(short, long)]
    pub option: Option<String>,

    /// Raw option payload as hex, e.g. '00 20 20 01 0d b8 ...'
    #[arg(long)]
    pub hex: Option<String>,

    /// File containing a dhclient-formatted option value
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Read the option from the dhclient exit-hook environment
    #[arg(long)]
    pub from_env: bool,

    /// Environment variable holding the option when using --from-env
    #[arg(long, default_value = DHCLIENT_OPTION_VAR)]
    pub env_var: String,

    /// Local IPv4 address used to derive the delegated prefix
    #[arg(short, long)]
    pub address: Option<Ipv4Addr>,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Prefix)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Delegated IPv6 prefix in CIDR notation
    Prefix,
    /// dhclient long-form option value
    Dhclient,
    /// Raw option payload as hex
    Hex,
    /// All option fields
    Summary,
}

/// Where the option value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Dhclient(String),
    Hex(String),
    File(PathBuf),
    Env(String),
}

impl OptionSource {
    pub fn load(&self) -> Result<Option6rd, ToolError> {
        match self {
            OptionSource::Dhclient(value) => {
                tracing::debug!("Reading 6RD option from command line");
                Ok(value.parse()?)
            }
            OptionSource::Hex(value) => {
                tracing::debug!("Reading 6RD option from hex payload");
                let payload = parse_hex(value)?;
                Ok(Option6rd::try_from(payload.as_slice())?)
            }
            OptionSource::File(path) => {
                tracing::debug!("Reading 6RD option from {}", path.display());
                let value = fs::read_to_string(path)?;
                Ok(value.parse()?)
            }
            OptionSource::Env(var) => {
                tracing::debug!("Reading 6RD option from ${}", var);
                let value = env::var(var).map_err(|_| ToolError::MissingEnv(var.clone()))?;
                Ok(value.parse()?)
            }
        }
    }
}

pub struct ToolConfig {
    pub source: OptionSource,
    pub address: Option<Ipv4Addr>,
    pub output: OutputFormat,
}

impl ToolConfig {
    pub fn from_args(args: Args) -> Result<Self, ToolError> {
        let source = if let Some(value) = args.option {
            OptionSource::Dhclient(value)
        } else if let Some(value) = args.hex {
            OptionSource::Hex(value)
        } else if let Some(path) = args.file {
            OptionSource::File(path)
        } else {
            OptionSource::Env(args.env_var)
        };

        let address = match (args.address, &source) {
            (Some(addr), _) => Some(addr),
            (None, OptionSource::Env(_)) => address_from_env(DHCLIENT_ADDRESS_VAR),
            (None, _) => None,
        };

        Ok(Self {
            source,
            address,
            output: args.output,
        })
    }
}

/// Reads an IPv4 address from `var`. Unset, empty or malformed values yield `None`,
/// since dhclient hooks can leave the variable blank or stale.
pub fn address_from_env(var: &str) -> Option<Ipv4Addr> {
    let value = env::var(var).ok()?;
    match value.trim().parse() {
        Ok(addr) => Some(addr),
        Err(_) => {
            tracing::debug!("Ignoring unparseable ${}: '{}'", var, value);
            None
        }
    }
}

/// Parses a hex string (e.g. "0020200a" or "00:20:20:0a") into bytes.
pub fn parse_hex(hex: &str) -> Result<Vec<u8>, ToolError> {
    let digits: Vec<char> = hex
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(ToolError::HexParse(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let byte_str: String = pair.iter().collect();
            u8::from_str_radix(&byte_str, 16)
                .map_err(|e| ToolError::HexParse(format!("'{byte_str}': {e}")))
        })
        .collect()
}

/// Formats bytes as lowercase hex without separators.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
