//! Accepting a single TCP peer and receiving one bounded message from it

use slog::{info, o};
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};

use crate::Result;

/// Maximum number of bytes taken from the peer in the single receive call
pub const RECV_BUFFER_SIZE: usize = 1024;

/// A passive socket that accepts at most one peer connection.
///
/// Accepting consumes the listener, which closes the listening socket; a
/// connection attempt made after the first peer was accepted is refused
/// instead of being queued.
#[derive(Debug)]
pub struct OneshotListener {
    tcp_listener: TcpListener,
    logger: slog::Logger,
}

impl OneshotListener {
    /// Bind a stream socket to the given address and put it into listening state.
    /// An error is returned if the address is unavailable or already in use.
    pub fn bind<A, L>(addr: A, logger: Option<L>) -> Result<Self>
    where
        A: Into<SocketAddr>,
        L: Into<slog::Logger>,
    {
        let addr = addr.into();
        let logger = logger
            .map(|l| l.into())
            .unwrap_or_else(|| slog::Logger::root(slog::Discard, o!()));

        let tcp_listener = TcpListener::bind(addr)?;
        let logger = logger.new(o!("addr" => tcp_listener.local_addr()?.to_string()));
        info!(logger, "Waiting for a peer to connect");

        Ok(Self {
            tcp_listener,
            logger,
        })
    }

    /// Address the listening socket was bound to. Useful when the listener was
    /// bound to port 0 and the OS picked the port.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.tcp_listener.local_addr()?)
    }

    /// Block until one peer connects and return the accepted connection. There
    /// is no timeout; the call blocks indefinitely if no peer ever connects.
    pub fn accept(self) -> Result<PeerConnection> {
        let (stream, peer_addr) = self.tcp_listener.accept()?;
        let logger = self.logger.new(o!("peer_addr" => peer_addr.to_string()));
        info!(logger, "Peer connected");

        Ok(PeerConnection {
            stream,
            peer_addr,
            logger,
        })
    }
}

/// The single accepted peer connection.
#[derive(Debug)]
pub struct PeerConnection {
    stream: TcpStream,
    peer_addr: SocketAddr,
    logger: slog::Logger,
}

impl PeerConnection {
    /// Address of the connected peer.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Read up to [`RECV_BUFFER_SIZE`] bytes from the peer in a single call and
    /// decode them as UTF-8. Whatever arrives in that one read is treated as
    /// the complete message; a peer that closes without sending yields an
    /// empty string.
    ///
    /// The connection is consumed, so the socket is closed whether or not the
    /// read produced data and whether or not the payload decoded successfully.
    pub fn recv_utf8(mut self) -> Result<String> {
        let mut payload = vec![0u8; RECV_BUFFER_SIZE];
        let n_read = self.stream.read(&mut payload)?;
        payload.truncate(n_read);
        info!(self.logger, "Received payload"; "bytes" => n_read);

        Ok(String::from_utf8(payload)?)
    }
}
