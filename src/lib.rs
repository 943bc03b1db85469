//! Combinatorial optimization engines over synthetic star maps in Rust.
//! Generic over floating point numeric types.
//!
//! A star map is a set of labeled nodes ("stars"), each with a 3D coordinate
//! and a (weight, profit) pair, connected by undirected routes carrying the
//! Euclidean distance between their endpoints. Three engines operate on it:
//!  1. Single-source shortest paths via Dijkstra's algorithm, reporting the
//!     minimal distance and the path taken to every star of the map;
//!  2. Minimum spanning tree via Kruskal's algorithm, backed by a union-find
//!     structure for cycle avoidance; and
//!  3. 0/1 knapsack selection over the stars' (weight, profit) pairs via
//!     bottom-up dynamic programming, exposing the full table alongside the
//!     optimal subset.
//!
//! The engines are pure and single-threaded: they borrow an immutable
//! [`StarMap`] (or star list) and return a result structure. Dataset parsing,
//! report rendering and a seeded generator live in the [`dataset`] module;
//! file I/O stays with the caller.
//!
//! # Examples
//! ```
//!use starmap::{knapsack, minimum_spanning_tree, shortest_paths, RawRoute, Star, StarMap};
//!
//!let stars = vec![
//!    Star::new("A", [0.0, 0.0, 0.0], 2, 3),
//!    Star::new("B", [3.0, 4.0, 0.0], 3, 4),
//!    Star::new("C", [6.0, 8.0, 0.0], 4, 5),
//!];
//!let routes = vec![
//!    RawRoute { from: "A".into(), to: "B".into(), distance: 5.0 },
//!    RawRoute { from: "B".into(), to: "C".into(), distance: 5.0 },
//!];
//!let map = StarMap::build(stars, routes).unwrap();
//!
//!let paths = shortest_paths(&map, 0).unwrap();
//!assert_eq!(10.0, paths[2].distance);
//!
//!let tree = minimum_spanning_tree(&map);
//!assert!(tree.is_spanning(map.n_stars()));
//!
//!let best = knapsack(map.stars(), 5).unwrap();
//!assert_eq!(7, best.total_profit);
//! ```

pub use crate::error::StarMapError;
pub use crate::graph::{RawRoute, Route, Star, StarMap};
pub use crate::knapsack::{knapsack, KnapsackSolution, KnapsackTable};
pub use crate::shortest_path::{shortest_paths, PathResult};
pub use crate::spanning_tree::{minimum_spanning_tree, SpanningTree};

pub mod dataset;
mod distance;
mod error;
mod graph;
mod knapsack;
mod shortest_path;
mod spanning_tree;
mod union_find;
mod validation;
