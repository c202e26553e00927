//! Weighted consistent hashing compatible with libketama
//! Maps keys onto one server of a weighted server list, e.g. to shard keys between memcached nodes without central coordination
//!
//! Servers are described by an address and a weight
//! The address is hashed to place the server on a 32-bit continuum (ring)
//! The weight defines how many points a server owns on the continuum. Each server owns up to 160 points, proportional to its share of the total weight
//! A key is hashed onto the same continuum and belongs to the server owning the next point
//!
//! Adding or removing a server only moves the keys next to that server's points to other servers
//!
//! ```
//! use ketama_continuum::{Continuum, ServerList};
//!
//! let servers: ServerList = "10.0.1.1:11211 600\n10.0.1.2:11211 300\n10.0.1.3:11211 200\n"
//!     .parse()
//!     .unwrap();
//!
//! let continuum = Continuum::new(&servers).unwrap();
//! let server = continuum.get_server("user:1234").unwrap();
//! println!("user:1234 is stored on {}", server.addr);
//! ```
//!
//! Prerequisites:
//! All clients sharing a server list need the same list (same order, addresses and weights) and the same digest
//! to agree on key placement. A Continuum never changes, rebuild it when the server list changes.
//!

mod continuum;
pub mod digest;
mod error;
mod parse;
mod server;

pub use continuum::{Continuum, ContinuumIter, Point};
pub use digest::{Digest, Md5Digest, Sip128Digest, hash};
pub use error::{Error, ParseErrorKind, Result};
pub use server::{Server, ServerList};
