use std::{io, net::IpAddr};
use thiserror::Error;

/// Errors produced while decoding, encoding or deriving from a 6RD option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SixRdError {
    #[error("6RD option too short: {len} bytes, need at least 18")]
    TooShort { len: usize },

    #[error("6RD relay section of {len} bytes is not a multiple of 4")]
    TrailingBytes { len: usize },

    #[error("6RD option has {found} fields, need at least {needed}")]
    TooFewFields { found: usize, needed: usize },

    #[error("Invalid integer '{value}' for {field}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid address literal '{0}'")]
    InvalidAddress(String),

    #[error("Address {0} is not in IPv4 format")]
    NotIPv4(IpAddr),

    #[error("Delegated prefix overflows 128 bits (prefix_len {prefix_len}, mask_len {mask_len})")]
    PrefixOverflow { prefix_len: u8, mask_len: u8 },

    #[error("IPv4 mask length {0} is out of range (0-32)")]
    MaskLenOutOfRange(u8),

    #[error("IPv6 prefix length {0} is out of range (0-128)")]
    PrefixLenOutOfRange(u8),
}

/// Errors surfaced by the `dhcp6rd` command line tool.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("6RD option error: {0}")]
    Option(#[from] SixRdError),

    #[error("Failed to parse hex payload: {0}")]
    HexParse(String),

    #[error("Environment variable '{0}' is not set")]
    MissingEnv(String),

    #[error("An IPv4 address (--address) is required to derive the prefix")]
    MissingAddress,
}
