//! CIDR block parsing and containment.
//!
//! The one computed relationship between template parameters: the subnet
//! range must be a subset of the network range. Everything else about the
//! address values is opaque to us and validated by the provider.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ValidationError;

/// An IPv4 address range in CIDR notation.
///
/// The address is required to be the network address of the range; a value
/// with host bits set (e.g. `10.0.0.1/24`) is rejected rather than silently
/// normalized, since the provider rejects it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl CidrBlock {
    /// Build a block from an address and prefix length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCidr` if the prefix exceeds 32 or
    /// the address has host bits set below the prefix.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, ValidationError> {
        if prefix > 32 {
            return Err(ValidationError::InvalidCidr {
                value: format!("{}/{}", addr, prefix),
                reason: "prefix length must be 32 or less".to_string(),
            });
        }

        let mask = Self::mask(prefix);
        let raw = u32::from(addr);
        if raw & !mask != 0 {
            let network = Ipv4Addr::from(raw & mask);
            return Err(ValidationError::InvalidCidr {
                value: format!("{}/{}", addr, prefix),
                reason: format!("host bits set; the network address is {}/{}", network, prefix),
            });
        }

        Ok(Self { addr, prefix })
    }

    fn mask(prefix: u8) -> u32 {
        if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - u32::from(prefix))
        }
    }

    /// Network address of the range.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Whether `other` is entirely contained in this range.
    ///
    /// A range contains itself.
    pub fn contains(&self, other: &CidrBlock) -> bool {
        other.prefix >= self.prefix
            && u32::from(other.addr) & Self::mask(self.prefix) == u32::from(self.addr)
    }

    /// Number of usable host addresses in the range.
    ///
    /// Follows the conventional rules: /31 is a two-host point-to-point
    /// link, /32 a single host, anything larger loses the network and
    /// broadcast addresses.
    pub fn hosts(&self) -> u64 {
        match self.prefix {
            32 => 1,
            31 => 2,
            p => (1u64 << (32 - u32::from(p))) - 2,
        }
    }
}

impl FromStr for CidrBlock {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidCidr {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (addr_part, prefix_part) = s
            .split_once('/')
            .ok_or_else(|| invalid("expected <address>/<prefix>"))?;

        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| invalid("not an IPv4 address"))?;
        let prefix: u8 = prefix_part
            .parse()
            .map_err(|_| invalid("prefix is not a number"))?;

        Self::new(addr, prefix)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
