/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::SocketAddr;

use g3_types::net::SocketOptions;

use crate::options::{assign_options, set_nonblocking};
use crate::util::{AddressFamily, default_bind_addr, resolve_blocking};
use crate::{
    BoundDatagramSocket, ChannelKind, Configurable, ConnectedDatagramSocket, Selector,
    SocketBuildError,
};

/// Builder of UDP sockets
#[derive(Clone)]
pub struct UdpSocketBuilder<S> {
    selector: S,
    options: SocketOptions,
}

impl<S: Selector> UdpSocketBuilder<S> {
    pub(crate) fn new(selector: S, options: SocketOptions) -> Self {
        UdpSocketBuilder { selector, options }
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Bind to `local_addr`, or to the wildcard address with an ephemeral port
    pub fn bind(
        &self,
        local_addr: Option<SocketAddr>,
    ) -> Result<BoundDatagramSocket<S>, SocketBuildError> {
        let addr = local_addr.unwrap_or_else(default_bind_addr);
        self.selector.build_or_close(
            ChannelKind::Datagram,
            AddressFamily::from(&addr),
            |channel| {
                assign_options(&channel, &self.options)?;
                set_nonblocking(&channel)?;
                let socket = BoundDatagramSocket::new(channel, self.selector.clone());
                socket.bind(addr)?;
                Ok(socket)
            },
        )
    }

    pub fn bind_to(&self, host: &str, port: u16) -> Result<BoundDatagramSocket<S>, SocketBuildError> {
        let addr = resolve_blocking(host, port)?;
        self.bind(Some(addr))
    }

    /// Restrict the socket to `remote_addr`.
    ///
    /// The socket is bound to `local_addr` first, or to the wildcard address
    /// of the family of `remote_addr` with an ephemeral port.
    pub fn connect(
        &self,
        remote_addr: SocketAddr,
        local_addr: Option<SocketAddr>,
    ) -> Result<ConnectedDatagramSocket<S>, SocketBuildError> {
        self.selector.build_or_close(
            ChannelKind::Datagram,
            AddressFamily::from(&remote_addr),
            |channel| {
                assign_options(&channel, &self.options)?;
                set_nonblocking(&channel)?;
                let socket =
                    ConnectedDatagramSocket::new(channel, self.selector.clone(), remote_addr);
                let family = AddressFamily::from(&remote_addr);
                let local_addr =
                    local_addr.unwrap_or_else(|| SocketAddr::new(family.unspecified_ip(), 0));
                socket.bind(local_addr)?;
                socket.associate()?;
                Ok(socket)
            },
        )
    }

    pub fn connect_to(
        &self,
        host: &str,
        port: u16,
        local_addr: Option<SocketAddr>,
    ) -> Result<ConnectedDatagramSocket<S>, SocketBuildError> {
        let addr = resolve_blocking(host, port)?;
        self.connect(addr, local_addr)
    }
}

impl<S: Selector> Configurable for UdpSocketBuilder<S> {
    fn options(&self) -> &SocketOptions {
        &self.options
    }

    fn set_options(&mut self, options: SocketOptions) {
        self.options = options;
    }
}
