use crate::graph::StarMap;
use crate::StarMapError;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Shortest distance from the source to one star, with the index sequence of
/// the path taken. Stars the source cannot reach keep an infinite distance and
/// an empty path; callers must treat that as "unreachable", not as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<T> {
    pub distance: T,
    pub path: Vec<usize>,
}

impl<T: Float> PathResult<T> {
    pub fn is_unreachable(&self) -> bool {
        self.distance.is_infinite()
    }
}

/// Entry in the relaxation queue. `BinaryHeap` is a max-heap, so the ordering
/// is reversed to pop the smallest tentative distance first; ties are broken
/// by ascending star index to keep path reconstruction deterministic.
struct QueueEntry<T> {
    distance: T,
    star: usize,
}

impl<T: Float> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Distances are finite after dataset validation, so partial_cmp
        // cannot observe NaN here.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.star.cmp(&self.star))
    }
}

impl<T: Float> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Float> Eq for QueueEntry<T> {}

/// Computes single-source shortest paths over the map using Dijkstra's
/// algorithm with a binary heap.
///
/// The returned vector has one entry per star of the map, indexed by star
/// index, whether or not the star is reachable from `source`. Equal-distance
/// candidates are relaxed in ascending star index order, so the reported path
/// (not the distance) is deterministic when several shortest paths exist.
///
/// # Errors
/// * `UnknownStar` if `source` is not a valid star index.
pub fn shortest_paths<T: Float>(
    map: &StarMap<T>,
    source: usize,
) -> Result<Vec<PathResult<T>>, StarMapError> {
    if source >= map.n_stars() {
        return Err(StarMapError::UnknownStar(format!(
            "source index {source} is out of range for {} stars",
            map.n_stars()
        )));
    }

    let mut results: Vec<PathResult<T>> = (0..map.n_stars())
        .map(|_| PathResult {
            distance: T::infinity(),
            path: Vec::new(),
        })
        .collect();
    results[source] = PathResult {
        distance: T::zero(),
        path: vec![source],
    };

    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry {
        distance: T::zero(),
        star: source,
    });

    while let Some(QueueEntry { distance, star }) = queue.pop() {
        // A star can sit in the queue once per relaxation that improved it.
        // Entries whose tentative distance is worse than the recorded best
        // are stale and skipped.
        if distance > results[star].distance {
            continue;
        }

        for &(neighbour, route_distance) in map.neighbours(star) {
            let candidate = distance + route_distance;
            if candidate < results[neighbour].distance {
                let mut path = results[star].path.clone();
                path.push(neighbour);
                results[neighbour] = PathResult {
                    distance: candidate,
                    path,
                };
                queue.push(QueueEntry {
                    distance: candidate,
                    star: neighbour,
                });
            }
        }
    }

    Ok(results)
}
