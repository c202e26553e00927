use super::{Continuum, Point};
use crate::digest::{Digest, hash_with};
use crate::error::{Error, Result};
use crate::server::Server;

impl<D: Digest> Continuum<D> {
    /// The 32-bit hash of `key` as used for lookups.
    pub fn hash(&self, key: impl AsRef<[u8]>) -> u32 {
        hash_with(&self.digest, key.as_ref())
    }

    /// Returns the point responsible for `key`.
    ///
    /// This is the first point whose value is strictly greater than the key's hash. Keys hashing
    /// at or past the last point wrap around to the first point.
    pub fn get_point(&self, key: impl AsRef<[u8]>) -> Result<&Point> {
        self.point_for_hash(self.hash(key))
    }

    /// Returns the server responsible for `key`.
    pub fn get_server(&self, key: impl AsRef<[u8]>) -> Result<&Server> {
        let point = self.get_point(key)?;
        Ok(&self.servers[point.server])
    }

    /// Returns the point responsible for an already computed `hash`.
    pub fn point_for_hash(&self, hash: u32) -> Result<&Point> {
        let first = self.points.first().ok_or(Error::EmptyContinuum)?;
        let n = self.points.partition_point(|p| p.value <= hash);
        Ok(self.points.get(n).unwrap_or(first))
    }
}
