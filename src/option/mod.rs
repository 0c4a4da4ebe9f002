//! DHCPv4 6RD option (code 212)
//!
//! This module contains the option value itself and its two encodings:
//! - Raw wire bytes as carried inside a DHCP packet
//! - The textual form dhclient writes into its lease files and hook environment

pub mod dhclient;
pub mod wire;

#[cfg(test)]
mod tests;

use crate::error::SixRdError;
use std::{
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

/// DHCP option code assigned to 6RD by RFC 5969.
pub const OPTION_6RD_CODE: u8 = 212;

/// Size of the fixed part of the option: mask length, prefix length and prefix.
pub const WIRE_HEADER_LEN: usize = 18;

/// Parsed contents of the 6RD DHCP option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Option6rd {
    mask_len: u8,
    prefix_len: u8,
    prefix: Ipv6Addr,
    relays: Vec<Ipv4Addr>,
}

impl Option6rd {
    /// Builds an option from known-good parameters, e.g. a DHCP server's own
    /// configuration. Decoded options skip these checks and keep the wire values.
    pub fn new(
        mask_len: u8,
        prefix_len: u8,
        prefix: Ipv6Addr,
        relays: Vec<Ipv4Addr>,
    ) -> Result<Self, SixRdError> {
        if mask_len > 32 {
            return Err(SixRdError::MaskLenOutOfRange(mask_len));
        }
        if prefix_len > 128 {
            return Err(SixRdError::PrefixLenOutOfRange(prefix_len));
        }
        if u32::from(prefix_len) + 32 - u32::from(mask_len) > 128 {
            return Err(SixRdError::PrefixOverflow {
                prefix_len,
                mask_len,
            });
        }
        Ok(Self::from_parts(mask_len, prefix_len, prefix, relays))
    }

    pub(crate) fn from_parts(
        mask_len: u8,
        prefix_len: u8,
        prefix: Ipv6Addr,
        relays: Vec<Ipv4Addr>,
    ) -> Self {
        Self {
            mask_len,
            prefix_len,
            prefix,
            relays,
        }
    }

    /// Number of leading IPv4 bits shared by the whole 6RD domain.
    pub fn mask_len(&self) -> u8 {
        self.mask_len
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The 6RD prefix as received. Bits past `prefix_len` are not cleared here.
    pub fn prefix(&self) -> Ipv6Addr {
        self.prefix
    }

    /// Border relay addresses in the order the server sent them.
    pub fn relays(&self) -> &[Ipv4Addr] {
        &self.relays
    }
}

impl TryFrom<&[u8]> for Option6rd {
    type Error = SixRdError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        wire::decode(payload)
    }
}

impl FromStr for Option6rd {
    type Err = SixRdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dhclient::decode(s)
    }
}

impl fmt::Display for Option6rd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dhclient::encode(self))
    }
}
