use std::fmt::{self, Display};
use std::ops::Index;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A backend server and its relative capacity.
///
/// * `addr` - address of the server, usually `ip:port`. It is hashed verbatim to place the server on the continuum
/// * `weight` - relative capacity, e.g. memory size. A server with weight 0 receives no points
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct Server {
    pub addr: String,
    pub weight: u64,
}

impl Server {
    pub fn new(addr: impl Into<String>, weight: u64) -> Server {
        Server {
            addr: addr.into(),
            weight,
        }
    }
}

/// Ordered list of weighted servers, the input of [`Continuum::new`](crate::Continuum::new).
///
/// Servers are identified by their position in the list. Addresses are not
/// required to be unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct ServerList {
    servers: Vec<Server>,
}

impl ServerList {
    pub fn new() -> ServerList {
        ServerList::default()
    }

    pub fn with_capacity(capacity: usize) -> ServerList {
        ServerList {
            servers: Vec::with_capacity(capacity),
        }
    }

    /// Number of servers in the list.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Returns true if the list has no servers.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Server> {
        self.servers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Server> {
        self.servers.iter()
    }

    pub fn as_slice(&self) -> &[Server] {
        &self.servers
    }

    /// Append `server` to the end of the list and return its index.
    ///
    /// Fails with [`Error::Allocation`](crate::Error::Allocation) if the list cannot grow.
    pub fn append(&mut self, server: Server) -> Result<usize> {
        self.servers.try_reserve(1)?;
        self.servers.push(server);
        Ok(self.servers.len() - 1)
    }

    /// Remove the server at `index`, shifting all following servers down by one.
    ///
    /// An out of range index leaves the list untouched and returns `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Server> {
        if index >= self.servers.len() {
            return None;
        }
        Some(self.servers.remove(index))
    }

    /// Index of the first server with the given address.
    pub fn find(&self, addr: &str) -> Option<usize> {
        self.servers.iter().position(|s| s.addr == addr)
    }

    /// Sum of all weights. Widened to `u128` so the sum of any list of `u64` weights is exact.
    pub fn total_weight(&self) -> u128 {
        self.servers.iter().map(|s| u128::from(s.weight)).sum()
    }
}

impl Index<usize> for ServerList {
    type Output = Server;

    fn index(&self, index: usize) -> &Server {
        &self.servers[index]
    }
}

impl FromIterator<Server> for ServerList {
    fn from_iter<I: IntoIterator<Item = Server>>(iter: I) -> Self {
        ServerList {
            servers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Server> for ServerList {
    fn extend<I: IntoIterator<Item = Server>>(&mut self, iter: I) {
        self.servers.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ServerList {
    type Item = &'a Server;
    type IntoIter = std::slice::Iter<'a, Server>;

    fn into_iter(self) -> Self::IntoIter {
        self.servers.iter()
    }
}

impl Display for ServerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.servers.is_empty() {
            return writeln!(f, "Server List is empty");
        }
        for server in &self.servers {
            writeln!(f, "Server {}, Memory {}", server.addr, server.weight)?;
        }
        Ok(())
    }
}
