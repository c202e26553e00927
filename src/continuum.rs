use std::fmt::{self, Display};

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use crate::digest::{Digest, Md5Digest};
use crate::error::Result;
use crate::server::ServerList;

mod build;
mod iterator;
mod lookup;

pub use iterator::ContinuumIter;

/// A point on the continuum.
///
/// * `value` - position on the 32-bit continuum
/// * `server` - index of the owning server in [`Continuum::servers`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct Point {
    pub value: u32,
    pub server: usize,
}

impl Point {
    fn new(value: u32, server: usize) -> Point {
        Point { value, server }
    }
}

/// Continuum represents a weighted set of servers placed on a 32-bit hash ring (ketama)
/// Each server owns a number of points proportional to its share of the total weight
/// A key belongs to the server owning the first point after the key's hash, wrapping around at the end of the ring
///
/// A Continuum never changes after it was built. If servers join or leave, build a new one from the updated
/// [`ServerList`] and replace the old one, for example behind an `Arc`. Lookups only need `&self`, so a
/// Continuum can be shared between threads freely.
#[derive(Clone, PartialEq, Debug)]
pub struct Continuum<D = Md5Digest> {
    digest: D,
    points: Vec<Point>,
    servers: ServerList,
}

impl Continuum {
    /// Build a continuum for `servers` using MD5, compatible with libketama placement.
    ///
    /// # Arguments
    ///
    /// * `servers` - weighted servers. The list is copied, later changes to it do not affect the continuum
    ///
    /// # Examples
    ///
    /// ```
    /// use ketama_continuum::{Continuum, ServerList};
    ///
    /// let servers: ServerList = "10.0.1.1:11211 600\n10.0.1.2:11211 300\n".parse().unwrap();
    /// let continuum = Continuum::new(&servers).unwrap();
    ///
    /// let server = continuum.get_server("user:1234").unwrap();
    /// assert!(servers.find(&server.addr).is_some());
    /// ```
    pub fn new(servers: &ServerList) -> Result<Continuum> {
        Continuum::with_digest(servers, Md5Digest)
    }
}

impl<D: Digest> Continuum<D> {
    /// Build a continuum for `servers` using the given digest for point placement and key hashing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ketama_continuum::{Continuum, Server, ServerList, Sip128Digest};
    ///
    /// let servers: ServerList = vec![
    ///     Server::new("10.0.1.1:11211", 1),
    ///     Server::new("10.0.1.2:11211", 1),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let continuum = Continuum::with_digest(&servers, Sip128Digest::new()).unwrap();
    /// assert_eq!(continuum.len(), 2 * 160);
    /// ```
    pub fn with_digest(servers: &ServerList, digest: D) -> Result<Continuum<D>> {
        let points = build::place_points(servers, &digest)?;

        Ok(Continuum {
            digest,
            points,
            servers: servers.clone(),
        })
    }
}

impl<D> Continuum<D> {
    /// Get the number of points on the continuum.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the continuum has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The servers this continuum was built from, in their original order.
    pub fn servers(&self) -> &ServerList {
        &self.servers
    }

    /// All points in ascending order of their value.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The digest used to place points and hash keys.
    pub fn digest(&self) -> &D {
        &self.digest
    }

    #[cfg(test)]
    pub(crate) fn from_parts(servers: ServerList, points: Vec<Point>, digest: D) -> Continuum<D> {
        Continuum {
            digest,
            points,
            servers,
        }
    }
}

impl<D> Display for Continuum<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points.is_empty() {
            return writeln!(f, "Continuum is empty");
        }
        writeln!(f, "Numpoints in continuum: {}", self.points.len())?;
        for (value, server) in self.iter() {
            writeln!(f, "{} ({})", server.addr, value)?;
        }
        Ok(())
    }
}
