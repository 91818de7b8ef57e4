/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::runtime::Handle;

use super::Selector;
use crate::util::AddressFamily;
use crate::{
    BoundDatagramSocket, ChannelKind, ConnectedDatagramSocket, RawChannel, ServerSocket, Socket,
};

/// A selector driven by a tokio runtime
#[derive(Clone, Debug)]
pub struct TokioSelector {
    handle: Handle,
}

impl TokioSelector {
    /// Use the runtime of the current context.
    ///
    /// # Panics
    ///
    /// This will panic if called outside the context of a tokio runtime.
    pub fn current() -> Self {
        TokioSelector {
            handle: Handle::current(),
        }
    }

    #[inline]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl From<Handle> for TokioSelector {
    fn from(handle: Handle) -> Self {
        TokioSelector { handle }
    }
}

impl Selector for TokioSelector {
    type Channel = RawChannel;

    fn open_channel(&self, kind: ChannelKind, family: AddressFamily) -> io::Result<RawChannel> {
        RawChannel::open(kind, family, self.handle.clone())
    }

    fn resolve(
        &self,
        host: &str,
        port: u16,
    ) -> impl Future<Output = io::Result<Vec<SocketAddr>>> + Send {
        let host = host.to_string();
        async move {
            let addrs = tokio::net::lookup_host((host.as_str(), port)).await?;
            Ok(addrs.collect())
        }
    }
}

impl Socket<TokioSelector> {
    /// Register the connected socket to the runtime of the selector
    pub fn into_tcp_stream(self) -> io::Result<TcpStream> {
        let (channel, selector) = self.into_parts();
        let _guard = selector.handle().enter();
        TcpStream::from_std(channel.into_socket().into())
    }
}

impl ServerSocket<TokioSelector> {
    pub fn into_tcp_listener(self) -> io::Result<TcpListener> {
        let (channel, selector) = self.into_parts();
        let _guard = selector.handle().enter();
        TcpListener::from_std(channel.into_socket().into())
    }
}

impl BoundDatagramSocket<TokioSelector> {
    pub fn into_udp_socket(self) -> io::Result<UdpSocket> {
        let (channel, selector) = self.into_parts();
        let _guard = selector.handle().enter();
        UdpSocket::from_std(channel.into_socket().into())
    }
}

impl ConnectedDatagramSocket<TokioSelector> {
    pub fn into_udp_socket(self) -> io::Result<UdpSocket> {
        let (channel, selector) = self.into_parts();
        let _guard = selector.handle().enter();
        UdpSocket::from_std(channel.into_socket().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use g3_types::net::TypeOfService;

    use crate::{Channel, Configurable, SocketBuildError, a_socket};

    fn loopback() -> Option<SocketAddr> {
        Some(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0))
    }

    #[tokio::test]
    async fn tcp_connect_accept() {
        let builder = a_socket(TokioSelector::current()).tcp();
        let server = builder.bind(loopback()).unwrap();
        let server_addr = server.local_addr().unwrap();
        assert_ne!(server_addr.port(), 0);
        let listener = server.into_tcp_listener().unwrap();

        let accept = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4];
            stream.read_exact(&mut buf).await.unwrap();
            buf
        });

        let socket = builder
            .tcp_no_delay()
            .connect(server_addr)
            .await
            .unwrap();
        assert_eq!(socket.remote_addr(), server_addr);
        assert_eq!(socket.channel().peer_addr().unwrap(), server_addr);
        assert!(socket.channel().socket().tcp_nodelay().unwrap());

        let mut stream = socket.into_tcp_stream().unwrap();
        stream.write_all(b"ping").await.unwrap();
        assert_eq!(&accept.await.unwrap(), b"ping");
    }

    #[tokio::test]
    async fn tcp_connect_refused() {
        let server = a_socket(TokioSelector::current())
            .tcp()
            .bind(loopback())
            .unwrap();
        let addr = server.local_addr().unwrap();
        drop(server);

        let e = a_socket(TokioSelector::current())
            .tcp()
            .connect(addr)
            .await
            .unwrap_err();
        assert!(matches!(e, SocketBuildError::Connect { .. }));
        assert_eq!(e.io_error_kind(), io::ErrorKind::ConnectionRefused);
    }

    #[tokio::test]
    async fn tcp_client_options() {
        let server = a_socket(TokioSelector::current())
            .tcp()
            .bind(loopback())
            .unwrap();
        let addr = server.local_addr().unwrap();
        let _listener = server.into_tcp_listener().unwrap();

        let socket = a_socket(TokioSelector::current())
            .tcp()
            .configure(|options| {
                options.general_mut().type_of_service = TypeOfService::IPTOS_LOWDELAY;
                let tcp = options.tcp_client_mut().unwrap();
                tcp.keep_alive = Some(true);
                tcp.linger_seconds = 1;
                tcp.client_mut().send_buffer_size = 65536;
            })
            .connect_to("127.0.0.1", addr.port())
            .await
            .unwrap();
        let sock = socket.channel().socket();
        assert!(sock.keepalive().unwrap());
        assert_eq!(sock.linger().unwrap(), Some(Duration::from_secs(1)));
        assert!(sock.send_buffer_size().unwrap() >= 65536);
        assert_eq!(sock.tos_v4().unwrap(), 0x10);
    }

    #[tokio::test]
    async fn udp_exchange() {
        let builder = a_socket(TokioSelector::current()).udp();
        let server = builder.bind(loopback()).unwrap();
        let server_addr = server.local_addr().unwrap();
        let server = server.into_udp_socket().unwrap();

        let client = builder.connect(server_addr, loopback()).unwrap();
        assert_eq!(client.remote_addr(), server_addr);
        let client_addr = client.local_addr().unwrap();
        assert_ne!(client_addr.port(), 0);
        let client = client.into_udp_socket().unwrap();

        client.send(b"hello").await.unwrap();
        let mut buf = [0u8; 16];
        let (len, peer) = server.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"hello");
        assert_eq!(peer, client_addr);
    }

    #[tokio::test]
    async fn resolve_localhost() {
        let addrs = TokioSelector::current()
            .resolve("localhost", 80)
            .await
            .unwrap();
        assert!(addrs.iter().all(|a| a.port() == 80));
        assert!(addrs.iter().any(|a| a.ip().is_loopback()));
    }
}
