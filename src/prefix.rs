//! Delegated prefix derivation (RFC 5969 section 7.1.1)
//!
//! A 6RD customer edge owns the IPv6 prefix formed by the 6RD prefix followed
//! by the bits of its IPv4 address that follow `mask_len`.

use crate::{error::SixRdError, option::Option6rd};
use ipnet::Ipv6Net;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Reads bit `index` of an IPv4 address, counting from the most significant bit.
fn ipv4_bit(addr: u32, index: u8) -> u128 {
    u128::from((addr >> (31 - index)) & 1)
}

/// Sets bit `index` of a 128-bit value to `bit`, counting from the most significant bit.
fn set_ipv6_bit(buf: &mut u128, index: u8, bit: u128) {
    *buf |= bit << (127 - index);
}

/// Keeps the first `len` bits of `addr`.
fn mask_to(addr: u128, len: u8) -> u128 {
    match len {
        0 => 0,
        len => addr & (u128::MAX << (128 - u32::from(len))),
    }
}

impl Option6rd {
    /// Returns the prefix delegated to the host holding `addr`.
    ///
    /// Any IPv6 input, including IPv4-mapped addresses, is rejected.
    pub fn delegated_prefix(&self, addr: IpAddr) -> Result<Ipv6Net, SixRdError> {
        match addr {
            IpAddr::V4(v4) => self.delegated_prefix_v4(v4),
            IpAddr::V6(_) => Err(SixRdError::NotIPv4(addr)),
        }
    }

    pub fn delegated_prefix_v4(&self, addr: Ipv4Addr) -> Result<Ipv6Net, SixRdError> {
        let mask_len = self.mask_len();
        let prefix_len = self.prefix_len();
        if mask_len > 32 {
            return Err(SixRdError::MaskLenOutOfRange(mask_len));
        }

        let delegated_len = u32::from(prefix_len) + 32 - u32::from(mask_len);
        if delegated_len > 128 {
            return Err(SixRdError::PrefixOverflow {
                prefix_len,
                mask_len,
            });
        }

        let v4 = u32::from(addr);
        let mut buf = mask_to(u128::from(self.prefix()), prefix_len);
        let mut cur6 = prefix_len;
        for cur4 in mask_len..32 {
            set_ipv6_bit(&mut buf, cur6, ipv4_bit(v4, cur4));
            cur6 += 1;
        }

        Ok(Ipv6Net::new_assert(Ipv6Addr::from(buf), delegated_len as u8))
    }
}
