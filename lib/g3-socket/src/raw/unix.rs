/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::SocketAddr;
use std::os::fd::AsRawFd;

use socket2::{SockAddr, Socket};
use tokio::io::Interest;
use tokio::io::unix::AsyncFd;
use tokio::runtime::Handle;

/// Connect a non-blocking stream socket.
///
/// The fd is only tracked by the runtime while the handshake is pending,
/// and it is never closed here.
pub(super) async fn connect(socket: &Socket, handle: &Handle, addr: SocketAddr) -> io::Result<()> {
    match socket.connect(&SockAddr::from(addr)) {
        Ok(_) => return Ok(()),
        Err(e) if e.raw_os_error() == Some(libc::EINPROGRESS) => {}
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
        Err(e) => return Err(e),
    }

    {
        let async_fd = {
            let _guard = handle.enter();
            AsyncFd::with_interest(socket.as_raw_fd(), Interest::WRITABLE)?
        };
        let _ready = async_fd.writable().await?;
    }

    match socket.take_error()? {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
