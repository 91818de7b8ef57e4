/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use g3_types::net::TypeOfService;

use crate::util::AddressFamily;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChannelKind {
    StreamClient,
    StreamServer,
    Datagram,
}

impl ChannelKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::StreamClient => "tcp client",
            ChannelKind::StreamServer => "tcp server",
            ChannelKind::Datagram => "udp",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single OS level socket opened by a [`Selector`](crate::Selector).
///
/// Dropping the channel closes the socket.
pub trait Channel: Send + Sync + 'static {
    fn kind(&self) -> ChannelKind;
    fn family(&self) -> AddressFamily;

    /// IP_TOS for IPv4, IPV6_TCLASS for IPv6
    fn set_type_of_service(&self, tos: TypeOfService) -> io::Result<()>;
    fn set_reuse_address(&self, enable: bool) -> io::Result<()>;
    fn set_reuse_port(&self, enable: bool) -> io::Result<()>;
    fn set_send_buffer_size(&self, size: usize) -> io::Result<()>;
    fn set_recv_buffer_size(&self, size: usize) -> io::Result<()>;
    fn set_linger(&self, linger: Duration) -> io::Result<()>;
    fn set_keepalive(&self, enable: bool) -> io::Result<()>;
    fn set_nodelay(&self, enable: bool) -> io::Result<()>;
    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()>;

    fn bind(&self, addr: SocketAddr) -> io::Result<()>;
    fn listen(&self, backlog: u32) -> io::Result<()>;
    /// Connect a stream socket, completes when the handshake is done
    fn connect(&mut self, addr: SocketAddr) -> impl Future<Output = io::Result<()>> + Send;
    /// Set the default peer of a datagram socket
    fn associate(&self, addr: SocketAddr) -> io::Result<()>;

    fn local_addr(&self) -> io::Result<SocketAddr>;
    fn peer_addr(&self) -> io::Result<SocketAddr>;
}
