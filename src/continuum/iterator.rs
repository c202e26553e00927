use super::{Continuum, Point};
use crate::server::Server;

/// Iterates over the points of a continuum in ascending order, yielding each point's value and owning server.
pub struct ContinuumIter<'a> {
    points: std::slice::Iter<'a, Point>,
    servers: &'a [Server],
}

impl<'a> Iterator for ContinuumIter<'a> {
    type Item = (u32, &'a Server);

    fn next(&mut self) -> Option<Self::Item> {
        let servers = self.servers;
        self.points
            .next()
            .map(|point| (point.value, &servers[point.server]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for ContinuumIter<'_> {}

impl<D> Continuum<D> {
    pub fn iter(&self) -> ContinuumIter<'_> {
        ContinuumIter {
            points: self.points.iter(),
            servers: self.servers.as_slice(),
        }
    }
}

impl<'a, D> IntoIterator for &'a Continuum<D> {
    type Item = (u32, &'a Server);

    type IntoIter = ContinuumIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
