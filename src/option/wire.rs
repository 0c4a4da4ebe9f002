//! Binary encoding of the 6RD option payload
//!
//! ```text
//! | mask_len (1) | prefix_len (1) | prefix (16) | relay (4) * N |
//! ```

use super::{Option6rd, WIRE_HEADER_LEN};
use crate::error::SixRdError;
use bytes::{Buf as _, BufMut as _, Bytes, BytesMut};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Parses a raw option payload (without the code and length octets).
pub fn decode(payload: &[u8]) -> Result<Option6rd, SixRdError> {
    if payload.len() < WIRE_HEADER_LEN {
        return Err(SixRdError::TooShort { len: payload.len() });
    }

    let relay_section = payload.len() - WIRE_HEADER_LEN;
    if relay_section % 4 != 0 {
        return Err(SixRdError::TrailingBytes { len: relay_section });
    }

    let mut buf = payload;
    let mask_len = buf.get_u8();
    let prefix_len = buf.get_u8();
    let mut prefix = [0u8; 16];
    buf.copy_to_slice(&mut prefix);

    let mut relays = Vec::with_capacity(relay_section / 4);
    while buf.has_remaining() {
        relays.push(Ipv4Addr::from(buf.get_u32()));
    }

    Ok(Option6rd::from_parts(
        mask_len,
        prefix_len,
        Ipv6Addr::from(prefix),
        relays,
    ))
}

/// Serializes the option back into its payload bytes.
pub fn encode(option: &Option6rd) -> Bytes {
    let mut buf = BytesMut::with_capacity(WIRE_HEADER_LEN + 4 * option.relays().len());
    buf.put_u8(option.mask_len());
    buf.put_u8(option.prefix_len());
    buf.put_slice(&option.prefix().octets());
    for relay in option.relays() {
        buf.put_slice(&relay.octets());
    }
    buf.freeze()
}

impl Option6rd {
    pub fn to_bytes(&self) -> Bytes {
        encode(self)
    }
}
