/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;
use std::net::SocketAddr;

use crate::{Channel, Selector, SocketBuildError};

fn bind_channel<C: Channel>(channel: &C, addr: SocketAddr) -> Result<(), SocketBuildError> {
    channel
        .bind(addr)
        .map_err(|source| SocketBuildError::Bind { addr, source })
}

/// A UDP socket that may exchange datagrams with any peer
pub struct BoundDatagramSocket<S: Selector> {
    channel: S::Channel,
    selector: S,
}

impl<S: Selector> BoundDatagramSocket<S> {
    pub(crate) fn new(channel: S::Channel, selector: S) -> Self {
        BoundDatagramSocket { channel, selector }
    }

    pub(crate) fn bind(&self, addr: SocketAddr) -> Result<(), SocketBuildError> {
        bind_channel(&self.channel, addr)
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

impl<S: Selector> fmt::Debug for BoundDatagramSocket<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundDatagramSocket")
            .field("local_addr", &self.channel.local_addr().ok())
            .finish_non_exhaustive()
    }
}

/// A UDP socket restricted to a single peer
pub struct ConnectedDatagramSocket<S: Selector> {
    channel: S::Channel,
    selector: S,
    remote_addr: SocketAddr,
}

impl<S: Selector> ConnectedDatagramSocket<S> {
    pub(crate) fn new(channel: S::Channel, selector: S, remote_addr: SocketAddr) -> Self {
        ConnectedDatagramSocket {
            channel,
            selector,
            remote_addr,
        }
    }

    pub(crate) fn bind(&self, addr: SocketAddr) -> Result<(), SocketBuildError> {
        bind_channel(&self.channel, addr)
    }

    pub(crate) fn associate(&self) -> Result<(), SocketBuildError> {
        let addr = self.remote_addr;
        self.channel
            .associate(addr)
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

impl<S: Selector> fmt::Debug for ConnectedDatagramSocket<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectedDatagramSocket")
            .field("remote_addr", &self.remote_addr)
            .finish_non_exhaustive()
    }
}
