/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::future::Future;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use g3_types::net::TypeOfService;

use crate::util::AddressFamily;
use crate::{Channel, ChannelKind, Selector};

const FIRST_EPHEMERAL_PORT: u16 = 40000;
const RESOLVED_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FailPoint {
    Open,
    Option(&'static str),
    NonBlocking,
    Bind,
    Listen,
    Connect,
    /// the connect never completes
    ConnectPending,
}

pub(crate) struct FakeState {
    opened: AtomicUsize,
    closed: AtomicUsize,
    resolved: AtomicUsize,
    next_port: AtomicU16,
    applied: Mutex<Vec<String>>,
}

impl Default for FakeState {
    fn default() -> Self {
        FakeState {
            opened: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            resolved: AtomicUsize::new(0),
            next_port: AtomicU16::new(FIRST_EPHEMERAL_PORT),
            applied: Mutex::new(Vec::new()),
        }
    }
}

impl FakeState {
    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }

    pub(crate) fn closed(&self) -> usize {
        self.closed.load(Ordering::Relaxed)
    }

    pub(crate) fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub(crate) fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }

    fn record(&self, option: String) {
        self.applied.lock().unwrap().push(option);
    }

    fn ephemeral_port(&self) -> u16 {
        self.next_port.fetch_add(1, Ordering::Relaxed)
    }
}

/// A selector that opens in-memory channels and records what is done to them
#[derive(Clone, Default)]
pub(crate) struct FakeSelector {
    state: Arc<FakeState>,
    fail: Option<FailPoint>,
}

impl FakeSelector {
    pub(crate) fn failing(fail: FailPoint) -> Self {
        FakeSelector {
            state: Arc::new(FakeState::default()),
            fail: Some(fail),
        }
    }

    pub(crate) fn state(&self) -> &FakeState {
        &self.state
    }
}

impl Selector for FakeSelector {
    type Channel = FakeChannel;

    fn open_channel(&self, kind: ChannelKind, family: AddressFamily) -> io::Result<FakeChannel> {
        if self.fail == Some(FailPoint::Open) {
            return Err(io::Error::other("too many open files"));
        }
        self.state.opened.fetch_add(1, Ordering::Relaxed);
        Ok(FakeChannel {
            kind,
            family,
            state: Arc::clone(&self.state),
            fail: self.fail,
            local: Mutex::new(None),
            peer: Mutex::new(None),
        })
    }

    fn resolve(
        &self,
        host: &str,
        port: u16,
    ) -> impl Future<Output = io::Result<Vec<SocketAddr>>> + Send {
        self.state.resolved.fetch_add(1, Ordering::Relaxed);
        let r = if host.ends_with(".invalid") {
            Ok(Vec::new())
        } else {
            Ok(vec![SocketAddr::new(RESOLVED_IP, port)])
        };
        std::future::ready(r)
    }
}

pub(crate) struct FakeChannel {
    kind: ChannelKind,
    family: AddressFamily,
    state: Arc<FakeState>,
    fail: Option<FailPoint>,
    local: Mutex<Option<SocketAddr>>,
    peer: Mutex<Option<SocketAddr>>,
}

impl FakeChannel {
    fn set(&self, option: &'static str, value: impl fmt::Display) -> io::Result<()> {
        if self.fail == Some(FailPoint::Option(option)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{option} rejected"),
            ));
        }
        self.state.record(format!("{option}={value}"));
        Ok(())
    }

    fn fail_at(&self, point: FailPoint, kind: io::ErrorKind) -> io::Result<()> {
        if self.fail == Some(point) {
            Err(io::Error::from(kind))
        } else {
            Ok(())
        }
    }

    fn auto_bind(&self) {
        let mut local = self.local.lock().unwrap();
        if local.is_none() {
            *local = Some(SocketAddr::new(
                self.family.unspecified_ip(),
                self.state.ephemeral_port(),
            ));
        }
    }
}

impl Drop for FakeChannel {
    fn drop(&mut self) {
        self.state.closed.fetch_add(1, Ordering::Relaxed);
    }
}

impl Channel for FakeChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    fn family(&self) -> AddressFamily {
        self.family
    }

    fn set_type_of_service(&self, tos: TypeOfService) -> io::Result<()> {
        match self.family {
            AddressFamily::Ipv4 => self.set("IP_TOS", tos),
            AddressFamily::Ipv6 => self.set("IPV6_TCLASS", tos),
        }
    }

    fn set_reuse_address(&self, enable: bool) -> io::Result<()> {
        self.set("SO_REUSEADDR", enable)
    }

    fn set_reuse_port(&self, enable: bool) -> io::Result<()> {
        self.set("SO_REUSEPORT", enable)
    }

    fn set_send_buffer_size(&self, size: usize) -> io::Result<()> {
        self.set("SO_SNDBUF", size)
    }

    fn set_recv_buffer_size(&self, size: usize) -> io::Result<()> {
        self.set("SO_RCVBUF", size)
    }

    fn set_linger(&self, linger: Duration) -> io::Result<()> {
        self.set("SO_LINGER", linger.as_secs())
    }

    fn set_keepalive(&self, enable: bool) -> io::Result<()> {
        self.set("SO_KEEPALIVE", enable)
    }

    fn set_nodelay(&self, enable: bool) -> io::Result<()> {
        self.set("TCP_NODELAY", enable)
    }

    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        self.fail_at(FailPoint::NonBlocking, io::ErrorKind::Unsupported)?;
        self.state.record(format!("O_NONBLOCK={nonblocking}"));
        Ok(())
    }

    fn bind(&self, addr: SocketAddr) -> io::Result<()> {
        self.fail_at(FailPoint::Bind, io::ErrorKind::AddrInUse)?;
        let port = if addr.port() == 0 {
            self.state.ephemeral_port()
        } else {
            addr.port()
        };
        *self.local.lock().unwrap() = Some(SocketAddr::new(addr.ip(), port));
        Ok(())
    }

    fn listen(&self, _backlog: u32) -> io::Result<()> {
        self.fail_at(FailPoint::Listen, io::ErrorKind::InvalidInput)?;
        self.auto_bind();
        Ok(())
    }

    fn connect(&mut self, addr: SocketAddr) -> impl Future<Output = io::Result<()>> + Send {
        async move {
            match self.fail {
                Some(FailPoint::Connect) => {
                    return Err(io::Error::from(io::ErrorKind::ConnectionRefused));
                }
                Some(FailPoint::ConnectPending) => std::future::pending::<()>().await,
                _ => {}
            }
            self.auto_bind();
            *self.peer.lock().unwrap() = Some(addr);
            Ok(())
        }
    }

    fn associate(&self, addr: SocketAddr) -> io::Result<()> {
        self.fail_at(FailPoint::Connect, io::ErrorKind::NetworkUnreachable)?;
        self.auto_bind();
        *self.peer.lock().unwrap() = Some(addr);
        Ok(())
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.local
            .lock()
            .unwrap()
            .ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))
    }

    fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.peer
            .lock()
            .unwrap()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotConnected))
    }
}
