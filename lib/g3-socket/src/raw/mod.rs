/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use tokio::runtime::Handle;

use g3_types::net::TypeOfService;

use crate::util::AddressFamily;
use crate::{Channel, ChannelKind};

mod unix;

/// A channel backed by a [`socket2::Socket`], made ready by a tokio runtime
#[derive(Debug)]
pub struct RawChannel {
    kind: ChannelKind,
    family: AddressFamily,
    socket: Socket,
    handle: Handle,
}

impl RawChannel {
    pub(crate) fn open(
        kind: ChannelKind,
        family: AddressFamily,
        handle: Handle,
    ) -> io::Result<Self> {
        let (ty, protocol) = match kind {
            ChannelKind::StreamClient | ChannelKind::StreamServer => (Type::STREAM, Protocol::TCP),
            ChannelKind::Datagram => (Type::DGRAM, Protocol::UDP),
        };
        let socket = Socket::new(Domain::from(family), ty, Some(protocol))?;
        Ok(RawChannel {
            kind,
            family,
            socket,
            handle,
        })
    }

    #[inline]
    pub fn socket(&self) -> &Socket {
        &self.socket
    }

    pub fn into_socket(self) -> Socket {
        self.socket
    }
}

fn sock_addr_to_inet(addr: SockAddr) -> io::Result<SocketAddr> {
    addr.as_socket()
        .ok_or_else(|| io::Error::other("not an inet socket address"))
}

impl Channel for RawChannel {
    #[inline]
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    #[inline]
    fn family(&self) -> AddressFamily {
        self.family
    }

    fn set_type_of_service(&self, tos: TypeOfService) -> io::Result<()> {
        let value = u32::from(tos.value());
        match self.family {
            #[cfg(not(any(target_os = "solaris", target_os = "illumos")))]
            AddressFamily::Ipv4 => self.socket.set_tos_v4(value),
            #[cfg(any(
                target_os = "android",
                target_os = "freebsd",
                target_os = "linux",
                target_os = "macos",
            ))]
            AddressFamily::Ipv6 => self.socket.set_tclass_v6(value),
            #[allow(unreachable_patterns)]
            _ => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "type of service is not supported on this platform",
            )),
        }
    }

    fn set_reuse_address(&self, enable: bool) -> io::Result<()> {
        self.socket.set_reuse_address(enable)
    }

    #[cfg(not(any(target_os = "solaris", target_os = "illumos")))]
    fn set_reuse_port(&self, enable: bool) -> io::Result<()> {
        self.socket.set_reuse_port(enable)
    }

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    fn set_reuse_port(&self, _enable: bool) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "SO_REUSEPORT is not supported on this platform",
        ))
    }

    fn set_send_buffer_size(&self, size: usize) -> io::Result<()> {
        self.socket.set_send_buffer_size(size)
    }

    fn set_recv_buffer_size(&self, size: usize) -> io::Result<()> {
        self.socket.set_recv_buffer_size(size)
    }

    fn set_linger(&self, linger: Duration) -> io::Result<()> {
        self.socket.set_linger(Some(linger))
    }

    fn set_keepalive(&self, enable: bool) -> io::Result<()> {
        self.socket.set_keepalive(enable)
    }

    fn set_nodelay(&self, enable: bool) -> io::Result<()> {
        self.socket.set_tcp_nodelay(enable)
    }

    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        self.socket.set_nonblocking(nonblocking)
    }

    fn bind(&self, addr: SocketAddr) -> io::Result<()> {
        self.socket.bind(&SockAddr::from(addr))
    }

    fn listen(&self, backlog: u32) -> io::Result<()> {
        let backlog = i32::try_from(backlog).unwrap_or(i32::MAX);
        self.socket.listen(backlog)
    }

    fn connect(&mut self, addr: SocketAddr) -> impl Future<Output = io::Result<()>> + Send {
        unix::connect(&self.socket, &self.handle, addr)
    }

    fn associate(&self, addr: SocketAddr) -> io::Result<()> {
        self.socket.connect(&SockAddr::from(addr))
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        sock_addr_to_inet(self.socket.local_addr()?)
    }

    fn peer_addr(&self) -> io::Result<SocketAddr> {
        sock_addr_to_inet(self.socket.peer_addr()?)
    }
}
