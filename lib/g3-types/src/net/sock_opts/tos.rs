/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

/// The IP ToS byte applied to outgoing packets.
///
/// [`TypeOfService::UNDEFINED`] is the default and is never set on a socket.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct TypeOfService(u8);

impl TypeOfService {
    pub const UNDEFINED: TypeOfService = TypeOfService(0x00);
    pub const IPTOS_LOWCOST: TypeOfService = TypeOfService(0x02);
    pub const IPTOS_RELIABILITY: TypeOfService = TypeOfService(0x04);
    pub const IPTOS_THROUGHPUT: TypeOfService = TypeOfService(0x08);
    pub const IPTOS_LOWDELAY: TypeOfService = TypeOfService(0x10);

    pub const fn new(value: u8) -> Self {
        TypeOfService(value)
    }

    /// Keep only the lowest 8 bits of `value`
    pub const fn from_truncated(value: u32) -> Self {
        TypeOfService((value & 0xFF) as u8)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        *self == TypeOfService::UNDEFINED
    }
}

impl From<u8> for TypeOfService {
    fn from(value: u8) -> Self {
        TypeOfService(value)
    }
}

impl fmt::Display for TypeOfService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct InvalidTypeOfService;

impl fmt::Display for InvalidTypeOfService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid type of service value")
    }
}

impl std::error::Error for InvalidTypeOfService {}

impl FromStr for TypeOfService {
    type Err = InvalidTypeOfService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undefined" | "none" => Ok(TypeOfService::UNDEFINED),
            "lowcost" | "low_cost" => Ok(TypeOfService::IPTOS_LOWCOST),
            "reliability" => Ok(TypeOfService::IPTOS_RELIABILITY),
            "throughput" => Ok(TypeOfService::IPTOS_THROUGHPUT),
            "lowdelay" | "low_delay" => Ok(TypeOfService::IPTOS_LOWDELAY),
            v => {
                let value = match v.strip_prefix("0x") {
                    Some(hex) => u8::from_str_radix(hex, 16),
                    None => u8::from_str(v),
                };
                value.map(TypeOfService).map_err(|_| InvalidTypeOfService)
            }
        }
    }
}
