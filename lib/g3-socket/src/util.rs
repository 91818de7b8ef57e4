/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};
use std::str::FromStr;

use socket2::Domain;

use crate::{Selector, SocketBuildError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn unspecified_ip(&self) -> IpAddr {
        match self {
            AddressFamily::Ipv4 => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            AddressFamily::Ipv6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "Ipv4"),
            AddressFamily::Ipv6 => write!(f, "Ipv6"),
        }
    }
}

impl From<AddressFamily> for Domain {
    fn from(v: AddressFamily) -> Self {
        match v {
            AddressFamily::Ipv4 => Domain::IPV4,
            AddressFamily::Ipv6 => Domain::IPV6,
        }
    }
}

impl From<&IpAddr> for AddressFamily {
    fn from(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

impl From<&SocketAddr> for AddressFamily {
    fn from(addr: &SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(_) => AddressFamily::Ipv4,
            SocketAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

pub fn native_socket_addr(orig: SocketAddr) -> SocketAddr {
    if let SocketAddr::V6(a6) = orig {
        if let Some(ip4) = a6.ip().to_ipv4_mapped() {
            SocketAddr::new(IpAddr::V4(ip4), a6.port())
        } else {
            orig
        }
    } else {
        orig
    }
}

/// The wildcard address with an ephemeral port
pub(crate) fn default_bind_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
}

/// Resolve through the selector, used by operations that may suspend
pub(crate) async fn resolve_remote<S: Selector>(
    selector: &S,
    host: &str,
    port: u16,
) -> Result<SocketAddr, SocketBuildError> {
    if let Ok(ip) = IpAddr::from_str(host) {
        return Ok(native_socket_addr(SocketAddr::new(ip, port)));
    }
    let addrs = selector
        .resolve(host, port)
        .await
        .map_err(|source| SocketBuildError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;
    addrs
        .into_iter()
        .next()
        .map(native_socket_addr)
        .ok_or_else(|| SocketBuildError::NoAddress {
            host: host.to_string(),
            port,
        })
}

/// Resolve with the platform resolver, used by operations that never suspend
pub(crate) fn resolve_blocking(host: &str, port: u16) -> Result<SocketAddr, SocketBuildError> {
    let mut addrs =
        (host, port)
            .to_socket_addrs()
            .map_err(|source| SocketBuildError::Resolve {
                host: host.to_string(),
                port,
                source,
            })?;
    addrs
        .next()
        .map(native_socket_addr)
        .ok_or_else(|| SocketBuildError::NoAddress {
            host: host.to_string(),
            port,
        })
}
