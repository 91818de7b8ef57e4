/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::SocketAddr;

use g3_types::net::{SocketOptions, SocketOptionsKind};

use crate::options::{assign_options, set_nonblocking};
use crate::util::{AddressFamily, default_bind_addr, resolve_blocking, resolve_remote};
use crate::{ChannelKind, Configurable, Selector, ServerSocket, Socket, SocketBuildError};

pub const DEFAULT_LISTEN_BACKLOG: u32 = 4096;

/// Builder of TCP client and server sockets
#[derive(Clone)]
pub struct TcpSocketBuilder<S> {
    selector: S,
    options: SocketOptions,
}

impl<S: Selector> TcpSocketBuilder<S> {
    pub(crate) fn new(selector: S, options: SocketOptions) -> Self {
        TcpSocketBuilder { selector, options }
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Connect to `remote_addr`.
    ///
    /// The socket is closed if any option could not be set or if the
    /// connection failed, and also if the returned future is dropped.
    pub async fn connect(&self, remote_addr: SocketAddr) -> Result<Socket<S>, SocketBuildError> {
        let options = &self.options;
        let selector = self.selector.clone();
        self.selector
            .build_or_close_async(
                ChannelKind::StreamClient,
                AddressFamily::from(&remote_addr),
                move |channel| async move {
                    assign_options(&channel, options)?;
                    set_nonblocking(&channel)?;
                    let mut socket = Socket::new(channel, selector, remote_addr);
                    socket.connect().await?;
                    Ok::<_, SocketBuildError>(socket)
                },
            )
            .await
    }

    /// Resolve `host` and connect to the first address found
    pub async fn connect_to(&self, host: &str, port: u16) -> Result<Socket<S>, SocketBuildError> {
        let addr = resolve_remote(&self.selector, host, port).await?;
        self.connect(addr).await
    }

    /// Bind a listening socket to `local_addr`, or to the wildcard address
    /// with an ephemeral port.
    ///
    /// Only the options shared with server sockets are applied.
    pub fn bind(&self, local_addr: Option<SocketAddr>) -> Result<ServerSocket<S>, SocketBuildError> {
        let addr = local_addr.unwrap_or_else(default_bind_addr);
        let options = self.options.narrow(SocketOptionsKind::Server);
        self.selector.build_or_close(
            ChannelKind::StreamServer,
            AddressFamily::from(&addr),
            |channel| {
                assign_options(&channel, &options)?;
                set_nonblocking(&channel)?;
                let socket = ServerSocket::new(channel, self.selector.clone());
                socket.bind(addr, DEFAULT_LISTEN_BACKLOG)?;
                Ok(socket)
            },
        )
    }

    pub fn bind_to(&self, host: &str, port: u16) -> Result<ServerSocket<S>, SocketBuildError> {
        let addr = resolve_blocking(host, port)?;
        self.bind(Some(addr))
    }
}

impl<S: Selector> Configurable for TcpSocketBuilder<S> {
    fn options(&self) -> &SocketOptions {
        &self.options
    }

    fn set_options(&mut self, options: SocketOptions) {
        self.options = options;
    }
}
