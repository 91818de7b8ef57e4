/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

use crate::ChannelKind;

#[derive(Debug, Error)]
pub enum SocketBuildError {
    #[error("failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        source: io::Error,
    },
    #[error("no address found for {host}:{port}")]
    NoAddress { host: String, port: u16 },
    #[error("failed to open {kind} socket: {source}")]
    Open { kind: ChannelKind, source: io::Error },
    #[error("failed to set socket option {option}: {source}")]
    Configure {
        option: &'static str,
        source: io::Error,
    },
    #[error("failed to set non-blocking mode: {0}")]
    NonBlocking(#[source] io::Error),
    #[error("failed to bind to {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
    #[error("failed to listen: {0}")]
    Listen(#[source] io::Error),
    #[error("failed to connect to {addr}: {source}")]
    Connect { addr: SocketAddr, source: io::Error },
}

impl SocketBuildError {
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            SocketBuildError::NoAddress { .. } => None,
            SocketBuildError::Resolve { source, .. }
            | SocketBuildError::Open { source, .. }
            | SocketBuildError::Configure { source, .. }
            | SocketBuildError::Bind { source, .. }
            | SocketBuildError::Connect { source, .. } => Some(source),
            SocketBuildError::NonBlocking(e) | SocketBuildError::Listen(e) => Some(e),
        }
    }

    pub fn io_error_kind(&self) -> io::ErrorKind {
        self.io_error()
            .map(|e| e.kind())
            .unwrap_or(io::ErrorKind::NotFound)
    }
}

impl From<SocketBuildError> for io::Error {
    fn from(e: SocketBuildError) -> Self {
        let kind = e.io_error_kind();
        io::Error::new(kind, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_io_kind() {
        let e = SocketBuildError::Connect {
            addr: "127.0.0.1:80".parse().unwrap(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert_eq!(e.io_error_kind(), io::ErrorKind::ConnectionRefused);
        let io_err = io::Error::from(e);
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
        assert!(io_err.to_string().starts_with("failed to connect to 127.0.0.1:80"));

        let e = SocketBuildError::NoAddress {
            host: "example.invalid".to_string(),
            port: 80,
        };
        assert!(e.io_error().is_none());
        assert_eq!(io::Error::from(e).kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn display() {
        let e = SocketBuildError::Configure {
            option: "SO_SNDBUF",
            source: io::Error::from(io::ErrorKind::InvalidInput),
        };
        assert!(e.to_string().starts_with("failed to set socket option SO_SNDBUF"));

        let e = SocketBuildError::Open {
            kind: ChannelKind::Datagram,
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(e.to_string().starts_with("failed to open udp socket"));
    }
}
