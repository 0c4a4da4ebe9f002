//! Textual 6RD option as produced by dhclient
//!
//! dhclient prints the option according to the declaration in `dhclient.conf`.
//! Two declarations are in common use:
//!
//! ```text
//! option option-6rd code 212 = { integer 8, integer 8, integer 16, integer 16,
//!     integer 16, integer 16, integer 16, integer 16, integer 16, integer 16,
//!     array of ip-address };
//!
//! option option-6rd code 212 = { integer 8, integer 8, ip6-address,
//!     array of ip-address };
//! ```
//!
//! Both are accepted on input. Output always uses the first (long) form.

use super::{wire, Option6rd, WIRE_HEADER_LEN};
use crate::error::SixRdError;
use bytes::{BufMut as _, BytesMut};
use std::net::{Ipv4Addr, Ipv6Addr};

const SHORT_FORM_FIELDS: usize = 4;
const LONG_FORM_FIELDS: usize = 10;

/// Parses a dhclient-formatted 6RD option in either the long or short form.
pub fn decode(s: &str) -> Result<Option6rd, SixRdError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() < SHORT_FORM_FIELDS {
        return Err(SixRdError::TooFewFields {
            found: fields.len(),
            needed: SHORT_FORM_FIELDS,
        });
    }

    let mask_len = parse_int::<u8>("mask_len", fields[0])?;
    let prefix_len = parse_int::<u8>("prefix_len", fields[1])?;

    let mut buf = BytesMut::with_capacity(WIRE_HEADER_LEN + 4 * fields.len());
    buf.put_u8(mask_len);
    buf.put_u8(prefix_len);

    let relay_start = if fields[2].contains(':') {
        tracing::trace!("Decoding short-form 6RD option");
        let prefix: Ipv6Addr = fields[2]
            .parse()
            .map_err(|_| SixRdError::InvalidAddress(fields[2].to_string()))?;
        buf.put_slice(&prefix.octets());
        3
    } else {
        tracing::trace!("Decoding long-form 6RD option");
        if fields.len() < LONG_FORM_FIELDS {
            return Err(SixRdError::TooFewFields {
                found: fields.len(),
                needed: LONG_FORM_FIELDS,
            });
        }
        for word in &fields[2..LONG_FORM_FIELDS] {
            buf.put_u16(parse_int::<u16>("prefix word", word)?);
        }
        LONG_FORM_FIELDS
    };

    for field in &fields[relay_start..] {
        let relay: Ipv4Addr = field
            .parse()
            .map_err(|_| SixRdError::InvalidAddress(field.to_string()))?;
        buf.put_slice(&relay.octets());
    }

    wire::decode(&buf)
}

/// Renders the option in dhclient long form.
pub fn encode(option: &Option6rd) -> String {
    let mut fields = Vec::with_capacity(LONG_FORM_FIELDS + option.relays().len());
    fields.push(option.mask_len().to_string());
    fields.push(option.prefix_len().to_string());
    fields.extend(option.prefix().segments().iter().map(u16::to_string));
    fields.extend(option.relays().iter().map(Ipv4Addr::to_string));
    fields.join(" ")
}

fn parse_int<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, SixRdError> {
    value.parse().map_err(|_| SixRdError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

impl Option6rd {
    pub fn to_dhclient_string(&self) -> String {
        encode(self)
    }
}
