//! A single-connection TCP listener. The listener binds a stream socket to an
//! address, blocks until exactly one peer connects, takes one bounded receive
//! from that peer, and hands back the payload decoded as UTF-8 text.
//!
//! The listening socket accepts at most one connection; accepting consumes the
//! listener and receiving consumes the connection, so both sockets are closed
//! deterministically on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use recvone::OneshotListener;
//!
//! fn main() -> recvone::Result<()> {
//!     let listener = OneshotListener::bind(([127, 0, 0, 1], 65432), None::<slog::Logger>)?;
//!     let conn = listener.accept()?;
//!     let payload = conn.recv_utf8()?;
//!     println!("{}", payload);
//!     Ok(())
//! }
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod error;
pub mod listener;

pub use error::{Error, Result};
pub use listener::{OneshotListener, PeerConnection, RECV_BUFFER_SIZE};
