use crate::graph::{Route, StarMap};
use crate::union_find::UnionFind;
use num_traits::Float;

/// The routes accepted into a minimum spanning tree, in acceptance order.
/// A connected map of N stars yields exactly N-1 routes; fewer means the map
/// was disconnected and the result is a minimum spanning forest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    pub routes: Vec<Route<T>>,
}

impl<T: Float> SpanningTree<T> {
    pub fn total_distance(&self) -> T {
        self.routes
            .iter()
            .map(|route| route.distance)
            .fold(T::zero(), std::ops::Add::add)
    }

    /// Whether the tree spans a map of `n_stars` stars, i.e. the input was
    /// connected.
    pub fn is_spanning(&self, n_stars: usize) -> bool {
        n_stars > 0 && self.routes.len() == n_stars - 1
    }
}

/// Builds one minimum spanning tree of the map using Kruskal's algorithm.
///
/// Routes are sorted ascending by distance (the sort is stable, so routes of
/// equal distance keep their input order) and accepted greedily whenever their
/// endpoints lie in different components of the growing forest. Selection
/// stops once N-1 routes have been accepted.
pub fn minimum_spanning_tree<T: Float>(map: &StarMap<T>) -> SpanningTree<T> {
    let mut sorted_routes = map.routes().to_vec();
    // Unwrap is safe: route distances are validated finite at map build
    sorted_routes.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());

    let n_stars = map.n_stars();
    let mut union_find = UnionFind::new(n_stars);
    let mut accepted = Vec::with_capacity(n_stars.saturating_sub(1));

    for route in sorted_routes {
        if union_find.union(route.from, route.to) {
            accepted.push(route);
            if accepted.len() + 1 == n_stars {
                break;
            }
        }
    }

    SpanningTree { routes: accepted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{RawRoute, Star};

    fn map_from(labels: &[&str], routes: &[(&str, &str, f64)]) -> StarMap<f64> {
        let stars = labels
            .iter()
            .map(|name| Star::new(*name, [0.0, 0.0, 0.0], 1, 1))
            .collect();
        let routes = routes
            .iter()
            .map(|(from, to, distance)| RawRoute {
                from: (*from).into(),
                to: (*to).into(),
                distance: *distance,
            })
            .collect();
        StarMap::build(stars, routes).unwrap()
    }

    #[test]
    fn unit_cycle_drops_exactly_one_route() {
        let map = map_from(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "D", 1.0),
                ("D", "A", 1.0),
            ],
        );
        let tree = minimum_spanning_tree(&map);
        assert!(tree.is_spanning(4));
        assert_eq!(3, tree.routes.len());
        assert_eq!(3.0, tree.total_distance());
        // Stable sort keeps input order on ties, so the last cycle route is
        // the one rejected.
        assert!(!tree.routes.iter().any(|r| r.from == 3 && r.to == 0));
    }

    #[test]
    fn cheapest_bridge_wins() {
        let map = map_from(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
        );
        let tree = minimum_spanning_tree(&map);
        assert_eq!(2, tree.routes.len());
        assert_eq!(3.0, tree.total_distance());
    }

    #[test]
    fn disconnected_map_yields_a_forest() {
        let map = map_from(&["A", "B", "C", "D"], &[("A", "B", 1.0), ("C", "D", 1.0)]);
        let tree = minimum_spanning_tree(&map);
        assert_eq!(2, tree.routes.len());
        assert!(!tree.is_spanning(4));
    }

    #[test]
    fn single_star_spans_trivially() {
        let map = map_from(&["A"], &[]);
        let tree = minimum_spanning_tree(&map);
        assert!(tree.routes.is_empty());
        assert!(tree.is_spanning(1));
    }
}
