/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use log::debug;

use crate::util::AddressFamily;
use crate::{Channel, ChannelKind, SocketBuildError};

#[cfg(unix)]
mod native;
#[cfg(unix)]
pub use native::TokioSelector;

/// The I/O dispatcher that owns readiness notification for the channels.
///
/// Builders only ask it to open channels and to resolve names, the
/// registration of a channel is left to the selector or to the endpoint.
pub trait Selector: Clone + Send + Sync + 'static {
    type Channel: Channel;

    /// Open a new, unbound channel
    fn open_channel(&self, kind: ChannelKind, family: AddressFamily)
    -> io::Result<Self::Channel>;

    fn resolve(
        &self,
        host: &str,
        port: u16,
    ) -> impl Future<Output = io::Result<Vec<SocketAddr>>> + Send;

    /// Open a channel and hand it to `build`.
    ///
    /// The channel is owned by `build` and by whatever it is moved into, so
    /// on any error it has been closed before the error is returned here.
    fn build_or_close<T, F>(
        &self,
        kind: ChannelKind,
        family: AddressFamily,
        build: F,
    ) -> Result<T, SocketBuildError>
    where
        F: FnOnce(Self::Channel) -> Result<T, SocketBuildError>,
    {
        let channel = self
            .open_channel(kind, family)
            .map_err(|source| SocketBuildError::Open { kind, source })?;
        debug!("opened {family} {kind} socket");
        build(channel).inspect_err(|e| debug!("closed {family} {kind} socket: {e}"))
    }

    /// Async version of [`Selector::build_or_close`].
    ///
    /// Dropping the returned future closes the channel as well.
    fn build_or_close_async<T, F, Fut>(
        &self,
        kind: ChannelKind,
        family: AddressFamily,
        build: F,
    ) -> impl Future<Output = Result<T, SocketBuildError>> + Send
    where
        T: Send,
        F: FnOnce(Self::Channel) -> Fut + Send,
        Fut: Future<Output = Result<T, SocketBuildError>> + Send,
    {
        async move {
            let channel = self
                .open_channel(kind, family)
                .map_err(|source| SocketBuildError::Open { kind, source })?;
            debug!("opened {family} {kind} socket");
            build(channel)
                .await
                .inspect_err(|e| debug!("closed {family} {kind} socket: {e}"))
        }
    }
}
