//! # dhcp6rd - DHCPv4 6RD Option Toolkit
//!
//! dhcp6rd decodes and encodes DHCPv4 option 212, which carries the
//! parameters for IPv6 Rapid Deployment (RFC 5969), and computes the IPv6
//! prefix delegated to a host from its IPv4 address.
//!
//! ## Features
//!
//! - Binary option payload decoding and encoding
//! - dhclient textual format, in both the long and short declarations
//! - Delegated prefix derivation with overflow checks
//!
//! ## Example
//!
//! ```rust
//! use dhcp6rd::Option6rd;
//! use std::net::Ipv4Addr;
//!
//! let opt: Option6rd = "0 32 2001:db8:: 192.0.2.1".parse()?;
//! let net = opt.delegated_prefix_v4(Ipv4Addr::new(192, 0, 2, 200))?;
//! assert_eq!(net.to_string(), "2001:db8:c000:2c8::/64");
//! # Ok::<(), dhcp6rd::SixRdError>(())
//! ```

pub mod config;
pub mod error;
pub mod option;
pub mod prefix;

pub use config::{Args, ToolConfig};
pub use error::{SixRdError, ToolError};
pub use option::{Option6rd, OPTION_6RD_CODE, WIRE_HEADER_LEN};
