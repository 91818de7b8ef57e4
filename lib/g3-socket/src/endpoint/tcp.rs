/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;
use std::net::SocketAddr;

use crate::{Channel, Selector, SocketBuildError};

/// A connected TCP socket
pub struct Socket<S: Selector> {
    channel: S::Channel,
    selector: S,
    remote_addr: SocketAddr,
}

impl<S: Selector> Socket<S> {
    pub(crate) fn new(channel: S::Channel, selector: S, remote_addr: SocketAddr) -> Self {
        Socket {
            channel,
            selector,
            remote_addr,
        }
    }

    pub(crate) async fn connect(&mut self) -> Result<(), SocketBuildError> {
        let addr = self.remote_addr;
        self.channel
            .connect(addr)
            .await
            .map_err(|source| SocketBuildError::Connect { addr, source })
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    #[inline]
    pub fn channel(&self) -> &S::Channel {
        &self.channel
    }

    #[inline]
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.channel.local_addr()
    }

    pub fn into_channel(self) -> S::Channel {
        self.channel
    }

    pub fn into_parts(self) -> (S::Channel, S) {
        (self.channel, self.selector)
    }
}

impl<S: Selector> fmt::Debug for Socket<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Socket")
            .field("remote_addr", &self.remote_addr)
            .finish_non_exhaustive()
    }
}

/// A listening TCP socket
pub struct ServerSocket<S: Selector> {
    channel: S::Channel,
    selector: S,
}

impl<S: Selector> ServerSocket<S> {
    pub(crate) fn new(channel: S::Channel, selector: S) -> Self {
        ServerSocket { channel, selector }
    }

    pub(crate) fn bind(&self, addr: SocketAddr, backlog: u32) -> Result<(), SocketBuildError> {
        self.channel
            .bind(addr)
            .map_err(|source| SocketBuildError::Bind { addr, source })?;
        self.channel
            .listen(backlog)
            .map_err(SocketBuildError::Listen)
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    #[inline]
    pub fn channel(&self) -> &S::Channel {
        &self.channel
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.channel.local_addr()
    }

    pub fn into_channel(self) -> S::Channel {
        self.channel
    }

    pub fn into_parts(self) -> (S::Channel, S) {
        (self.channel, self.selector)
    }
}

impl<S: Selector> fmt::Debug for ServerSocket<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSocket")
            .field("local_addr", &self.channel.local_addr().ok())
            .finish_non_exhaustive()
    }
}
