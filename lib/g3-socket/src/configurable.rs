/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use g3_types::net::SocketOptions;

/// A builder holding socket options that may be changed fluently.
///
/// The options are never changed in place: a copy is made, changed and then
/// replaces the current options.
pub trait Configurable: Sized {
    fn options(&self) -> &SocketOptions;

    fn set_options(&mut self, options: SocketOptions);

    /// Configure the options in `f`.
    ///
    /// `f` may match on the concrete kind of options, e.g. to set TCP only
    /// fields only if this is a TCP builder.
    #[must_use]
    fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut SocketOptions),
    {
        let mut options = self.options().copy();
        f(&mut options);
        self.set_options(options);
        self
    }

    /// Like [`Configurable::configure`], but the options are left unchanged
    /// if `f` returns an error.
    fn try_configure<F, E>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut SocketOptions) -> Result<(), E>,
    {
        let mut options = self.options().copy();
        f(&mut options)?;
        self.set_options(options);
        Ok(self)
    }

    /// Set TCP_NODELAY to disable the Nagle algorithm.
    ///
    /// This has no effect if the options are not TCP client options.
    #[must_use]
    fn tcp_no_delay(self) -> Self {
        self.configure(|options| {
            if let Some(tcp) = options.tcp_client_mut() {
                tcp.no_delay = true;
            }
        })
    }
}
