/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use g3_types::net::{SocketOptions, SocketOptionsKind};

use crate::{Configurable, Selector, TcpSocketBuilder, UdpSocketBuilder};

/// Start building a socket on `selector`
pub fn a_socket<S: Selector>(selector: S) -> SocketBuilder<S> {
    SocketBuilder::new(selector)
}

#[derive(Clone)]
pub struct SocketBuilder<S> {
    selector: S,
    options: SocketOptions,
}

impl<S: Selector> SocketBuilder<S> {
    pub fn new(selector: S) -> Self {
        SocketBuilder {
            selector,
            options: SocketOptions::create(),
        }
    }

    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn tcp(&self) -> TcpSocketBuilder<S> {
        TcpSocketBuilder::new(
            self.selector.clone(),
            self.options.narrow(SocketOptionsKind::TcpClient),
        )
    }

    pub fn udp(&self) -> UdpSocketBuilder<S> {
        UdpSocketBuilder::new(
            self.selector.clone(),
            self.options.narrow(SocketOptionsKind::Client),
        )
    }
}

impl<S: Selector> Configurable for SocketBuilder<S> {
    fn options(&self) -> &SocketOptions {
        &self.options
    }

    fn set_options(&mut self, options: SocketOptions) {
        self.options = options;
    }
}
