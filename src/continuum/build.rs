use tracing::{debug, trace};

use super::Point;
use crate::digest::{Digest, words};
use crate::error::{Error, Result};
use crate::server::ServerList;

/// Anchors per server for a server holding exactly the average weight.
const ANCHORS_PER_SERVER: f64 = 40.0;
/// Every anchor digest is split into this many points.
const POINTS_PER_ANCHOR: usize = 4;

/// Number of anchors for a server with `weight`: `floor(weight / total * 40 * servers)`.
///
/// The share is computed in single precision, the product in double precision and the result is
/// rounded to single precision again before flooring. This reproduces libketama's point counts exactly.
fn anchor_count(weight: u64, total: u128, servers: usize) -> usize {
    let share = weight as f32 / total as f32;
    let anchors = f64::from(share) * ANCHORS_PER_SERVER * f64::from(servers as f32);
    (anchors as f32).floor() as usize
}

/// Places all points of `servers` and returns them sorted by value.
///
/// Points with the same value keep the order they were generated in: by server index, then anchor
/// index, then word within the anchor digest.
pub(super) fn place_points<D: Digest>(servers: &ServerList, digest: &D) -> Result<Vec<Point>> {
    let total = servers.total_weight();
    if servers.is_empty() || total == 0 {
        return Err(Error::EmptyInput);
    }

    let anchors: Vec<usize> = servers
        .iter()
        .map(|s| anchor_count(s.weight, total, servers.len()))
        .collect();

    let mut points = Vec::new();
    points.try_reserve_exact(anchors.iter().sum::<usize>() * POINTS_PER_ANCHOR)?;

    for (index, (server, &count)) in servers.iter().zip(&anchors).enumerate() {
        if server.weight == 0 {
            debug!(addr = %server.addr, "server has no weight, it will not own any points");
        }
        trace!(addr = %server.addr, weight = server.weight, anchors = count, "placing server");

        for anchor in 0..count {
            let label = format!("{}-{}", server.addr, anchor);
            for value in words(&digest.digest16(label.as_bytes())) {
                points.push(Point::new(value, index));
            }
        }
    }

    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    // stable, see above
    points.sort_by_key(|p| p.value);

    debug!(
        servers = servers.len(),
        total_weight = %total,
        points = points.len(),
        "built continuum"
    );

    Ok(points)
}
