/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{CustomOptions, TypeOfService};

/// Value of a size or time field that is left to the system default
pub const SIZE_UNSET: i32 = -1;

/// Options shared by every kind of socket
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneralSocketOptions {
    pub type_of_service: TypeOfService,
    /// SO_REUSEADDR
    pub reuse_address: bool,
    /// SO_REUSEPORT
    pub reuse_port: bool,
    custom: CustomOptions,
}

impl GeneralSocketOptions {
    pub(super) fn new(custom: CustomOptions) -> Self {
        GeneralSocketOptions {
            type_of_service: TypeOfService::UNDEFINED,
            reuse_address: false,
            reuse_port: false,
            custom,
        }
    }

    pub(super) fn copy_common(&mut self, from: &GeneralSocketOptions) {
        self.type_of_service = from.type_of_service;
        self.reuse_address = from.reuse_address;
        self.reuse_port = from.reuse_port;
    }

    #[inline]
    pub fn custom(&self) -> &CustomOptions {
        &self.custom
    }

    #[inline]
    pub fn custom_mut(&mut self) -> &mut CustomOptions {
        &mut self.custom
    }
}

/// Options for listening sockets
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerSocketOptions {
    general: GeneralSocketOptions,
}

impl ServerSocketOptions {
    pub(super) fn new(custom: CustomOptions) -> Self {
        ServerSocketOptions {
            general: GeneralSocketOptions::new(custom),
        }
    }

    #[inline]
    pub fn general(&self) -> &GeneralSocketOptions {
        &self.general
    }

    #[inline]
    pub fn general_mut(&mut self) -> &mut GeneralSocketOptions {
        &mut self.general
    }
}

/// Options for TCP client and UDP sockets
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientSocketOptions {
    general: GeneralSocketOptions,
    /// SO_SNDBUF, [`SIZE_UNSET`] for the system default
    pub send_buffer_size: i32,
    /// SO_RCVBUF, [`SIZE_UNSET`] for the system default
    pub receive_buffer_size: i32,
}

impl ClientSocketOptions {
    pub(super) fn new(custom: CustomOptions) -> Self {
        ClientSocketOptions {
            general: GeneralSocketOptions::new(custom),
            send_buffer_size: SIZE_UNSET,
            receive_buffer_size: SIZE_UNSET,
        }
    }

    pub(super) fn copy_buffers(&mut self, from: &ClientSocketOptions) {
        self.send_buffer_size = from.send_buffer_size;
        self.receive_buffer_size = from.receive_buffer_size;
    }

    #[inline]
    pub fn general(&self) -> &GeneralSocketOptions {
        &self.general
    }

    #[inline]
    pub fn general_mut(&mut self) -> &mut GeneralSocketOptions {
        &mut self.general
    }

    pub fn send_buffer_size(&self) -> Option<usize> {
        usize::try_from(self.send_buffer_size).ok()
    }

    pub fn receive_buffer_size(&self) -> Option<usize> {
        usize::try_from(self.receive_buffer_size).ok()
    }
}

/// Options for TCP client sockets
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TcpClientSocketOptions {
    client: ClientSocketOptions,
    /// TCP_NODELAY, set to disable Nagle
    pub no_delay: bool,
    /// SO_LINGER applied at close, [`SIZE_UNSET`] for the system default.
    ///
    /// `0` discards unsent data on close, which is only useful for debugging.
    pub linger_seconds: i32,
    /// SO_KEEPALIVE, `None` leaves the system default
    pub keep_alive: Option<bool>,
}

impl TcpClientSocketOptions {
    pub(super) fn new(custom: CustomOptions) -> Self {
        TcpClientSocketOptions {
            client: ClientSocketOptions::new(custom),
            no_delay: false,
            linger_seconds: SIZE_UNSET,
            keep_alive: None,
        }
    }

    pub(super) fn copy_tcp(&mut self, from: &TcpClientSocketOptions) {
        self.no_delay = from.no_delay;
        self.linger_seconds = from.linger_seconds;
        self.keep_alive = from.keep_alive;
    }

    #[inline]
    pub fn client(&self) -> &ClientSocketOptions {
        &self.client
    }

    #[inline]
    pub fn client_mut(&mut self) -> &mut ClientSocketOptions {
        &mut self.client
    }

    #[inline]
    pub fn general(&self) -> &GeneralSocketOptions {
        self.client.general()
    }

    #[inline]
    pub fn general_mut(&mut self) -> &mut GeneralSocketOptions {
        self.client.general_mut()
    }

    pub fn linger_seconds(&self) -> Option<u64> {
        u64::try_from(self.linger_seconds).ok()
    }
}
