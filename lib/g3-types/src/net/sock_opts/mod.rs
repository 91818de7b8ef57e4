/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

mod custom;
pub use custom::{CustomOptionValue, CustomOptions};

mod tos;
pub use tos::{InvalidTypeOfService, TypeOfService};

mod variant;
pub use variant::{
    ClientSocketOptions, GeneralSocketOptions, SIZE_UNSET, ServerSocketOptions,
    TcpClientSocketOptions,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SocketOptionsKind {
    General,
    Server,
    Client,
    TcpClient,
}

impl SocketOptionsKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SocketOptionsKind::General => "general",
            SocketOptionsKind::Server => "server",
            SocketOptionsKind::Client => "client",
            SocketOptionsKind::TcpClient => "tcp client",
        }
    }
}

impl fmt::Display for SocketOptionsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Socket options to be applied before a socket is bound or connected.
///
/// The variants form a hierarchy: `TcpClient` extends `Client`, and both
/// `Client` and `Server` extend `General`. Options are treated as values,
/// a change is always done on a copy which then replaces the old one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SocketOptions {
    General(GeneralSocketOptions),
    Server(ServerSocketOptions),
    Client(ClientSocketOptions),
    TcpClient(TcpClientSocketOptions),
}

impl Default for SocketOptions {
    fn default() -> Self {
        SocketOptions::create()
    }
}

impl SocketOptions {
    /// Create the root, general options
    pub fn create() -> Self {
        SocketOptions::new(SocketOptionsKind::General)
    }

    pub fn new(kind: SocketOptionsKind) -> Self {
        SocketOptions::with_custom(kind, CustomOptions::default())
    }

    fn with_custom(kind: SocketOptionsKind, custom: CustomOptions) -> Self {
        match kind {
            SocketOptionsKind::General => {
                SocketOptions::General(GeneralSocketOptions::new(custom))
            }
            SocketOptionsKind::Server => SocketOptions::Server(ServerSocketOptions::new(custom)),
            SocketOptionsKind::Client => SocketOptions::Client(ClientSocketOptions::new(custom)),
            SocketOptionsKind::TcpClient => {
                SocketOptions::TcpClient(TcpClientSocketOptions::new(custom))
            }
        }
    }

    pub fn kind(&self) -> SocketOptionsKind {
        match self {
            SocketOptions::General(_) => SocketOptionsKind::General,
            SocketOptions::Server(_) => SocketOptionsKind::Server,
            SocketOptions::Client(_) => SocketOptionsKind::Client,
            SocketOptions::TcpClient(_) => SocketOptionsKind::TcpClient,
        }
    }

    /// A new independent instance of the same kind.
    ///
    /// The custom options map is copied, but the values in it are shared.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy fields from `from` into `self`.
    ///
    /// The general fields are always copied. Fields that only exist on a
    /// narrower kind are copied only if `from` is at least as narrow as
    /// `self`, otherwise they keep their current value. Custom options are
    /// not touched.
    pub fn copy_common(&mut self, from: &SocketOptions) {
        self.general_mut().copy_common(from.general());

        match (self, from) {
            (SocketOptions::General(_) | SocketOptions::Server(_), _) => {}
            (SocketOptions::Client(to), SocketOptions::Client(from)) => to.copy_buffers(from),
            (SocketOptions::Client(to), SocketOptions::TcpClient(from)) => {
                to.copy_buffers(from.client())
            }
            (SocketOptions::Client(_), SocketOptions::General(_) | SocketOptions::Server(_)) => {}
            (SocketOptions::TcpClient(to), SocketOptions::TcpClient(from)) => {
                to.client_mut().copy_buffers(from.client());
                to.copy_tcp(from);
            }
            (SocketOptions::TcpClient(to), SocketOptions::Client(from)) => {
                to.client_mut().copy_buffers(from)
            }
            (
                SocketOptions::TcpClient(_),
                SocketOptions::General(_) | SocketOptions::Server(_),
            ) => {}
        }
    }

    /// View these options as options of `kind`.
    ///
    /// The custom options are carried forward, the typed fields follow the
    /// rules of [`SocketOptions::copy_common`].
    #[must_use]
    pub fn narrow(&self, kind: SocketOptionsKind) -> Self {
        let mut options = SocketOptions::with_custom(kind, self.general().custom().clone());
        options.copy_common(self);
        options
    }

    pub fn general(&self) -> &GeneralSocketOptions {
        match self {
            SocketOptions::General(o) => o,
            SocketOptions::Server(o) => o.general(),
            SocketOptions::Client(o) => o.general(),
            SocketOptions::TcpClient(o) => o.general(),
        }
    }

    pub fn general_mut(&mut self) -> &mut GeneralSocketOptions {
        match self {
            SocketOptions::General(o) => o,
            SocketOptions::Server(o) => o.general_mut(),
            SocketOptions::Client(o) => o.general_mut(),
            SocketOptions::TcpClient(o) => o.general_mut(),
        }
    }

    pub fn client(&self) -> Option<&ClientSocketOptions> {
        match self {
            SocketOptions::Client(o) => Some(o),
            SocketOptions::TcpClient(o) => Some(o.client()),
            SocketOptions::General(_) | SocketOptions::Server(_) => None,
        }
    }

    pub fn client_mut(&mut self) -> Option<&mut ClientSocketOptions> {
        match self {
            SocketOptions::Client(o) => Some(o),
            SocketOptions::TcpClient(o) => Some(o.client_mut()),
            SocketOptions::General(_) | SocketOptions::Server(_) => None,
        }
    }

    pub fn tcp_client(&self) -> Option<&TcpClientSocketOptions> {
        if let SocketOptions::TcpClient(o) = self {
            Some(o)
        } else {
            None
        }
    }

    pub fn tcp_client_mut(&mut self) -> Option<&mut TcpClientSocketOptions> {
        if let SocketOptions::TcpClient(o) = self {
            Some(o)
        } else {
            None
        }
    }
}
