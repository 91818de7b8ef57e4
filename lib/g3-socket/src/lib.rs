/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Fluent builders of TCP and UDP sockets.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use g3_socket::{Configurable, TokioSelector, a_socket};
//!
//! let socket = a_socket(TokioSelector::current())
//!     .tcp()
//!     .tcp_no_delay()
//!     .connect_to("example.net", 80)
//!     .await?;
//! let _stream = socket.into_tcp_stream()?;
//! # Ok(())
//! # }
//! ```

mod channel;
pub use channel::{Channel, ChannelKind};

mod error;
pub use error::SocketBuildError;

mod selector;
pub use selector::Selector;
#[cfg(unix)]
pub use selector::TokioSelector;

#[cfg(unix)]
mod raw;
#[cfg(unix)]
pub use raw::RawChannel;

mod options;

mod configurable;
pub use configurable::Configurable;

mod builder;
pub use builder::{SocketBuilder, a_socket};

mod tcp;
pub use tcp::{DEFAULT_LISTEN_BACKLOG, TcpSocketBuilder};

mod udp;
pub use udp::UdpSocketBuilder;

pub mod endpoint;
pub use endpoint::{BoundDatagramSocket, ConnectedDatagramSocket, ServerSocket, Socket};

pub mod util;
pub use util::AddressFamily;

#[cfg(test)]
mod testing;
