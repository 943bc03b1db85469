use crate::error::StarMapError;
use crate::validation::DatasetValidator;
use num_traits::Float;
use std::collections::HashMap;

/// A labeled point in the map: 3D coordinate plus the (weight, profit) pair
/// consumed by the knapsack solver. Weights and profits are unsigned, so
/// negative values cannot be represented; textual negatives are rejected at
/// parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Star<T> {
    pub name: String,
    pub coords: [T; 3],
    pub weight: u32,
    pub profit: u32,
}

impl<T: Float> Star<T> {
    pub fn new(name: impl Into<String>, coords: [T; 3], weight: u32, profit: u32) -> Self {
        Star {
            name: name.into(),
            coords,
            weight,
            profit,
        }
    }
}

/// An undirected route between two stars, still referring to them by label.
/// Produced by the parser and the generator; resolved to indices by
/// [`StarMap::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawRoute<T> {
    pub from: String,
    pub to: String,
    pub distance: T,
}

/// An undirected route with its endpoints resolved to star indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route<T> {
    pub from: usize,
    pub to: usize,
    pub distance: T,
}

/// Immutable adjacency representation of a star map. Stars are addressed by
/// index 0..N-1; the label↔index mapping is held explicitly, so labels are not
/// limited to single characters. Built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StarMap<T> {
    stars: Vec<Star<T>>,
    routes: Vec<Route<T>>,
    adjacency: Vec<Vec<(usize, T)>>,
    index: HashMap<String, usize>,
}

impl<T: Float> StarMap<T> {
    /// Validates the parsed stars and routes and assembles the adjacency
    /// lists. Every route is recorded in both directions.
    ///
    /// # Errors
    /// * `EmptyDataset` if no stars are passed.
    /// * `DuplicateStar` if two stars share a label.
    /// * `UnknownStar` if a route endpoint names no star.
    /// * `NonFiniteCoordinate` if any star coordinate is not finite.
    /// * `InvalidDistance` if a route distance is not a finite, non-negative
    ///   number.
    pub fn build(stars: Vec<Star<T>>, routes: Vec<RawRoute<T>>) -> Result<Self, StarMapError> {
        DatasetValidator::new(&stars, &routes).validate()?;

        let index: HashMap<String, usize> = stars
            .iter()
            .enumerate()
            .map(|(n, star)| (star.name.clone(), n))
            .collect();

        let mut adjacency = vec![Vec::new(); stars.len()];
        let mut resolved = Vec::with_capacity(routes.len());
        for route in &routes {
            // Indexing is safe due to endpoint validation above
            let from = index[&route.from];
            let to = index[&route.to];
            adjacency[from].push((to, route.distance));
            adjacency[to].push((from, route.distance));
            resolved.push(Route {
                from,
                to,
                distance: route.distance,
            });
        }

        Ok(StarMap {
            stars,
            routes: resolved,
            adjacency,
            index,
        })
    }

    pub fn n_stars(&self) -> usize {
        self.stars.len()
    }

    pub fn stars(&self) -> &[Star<T>] {
        &self.stars
    }

    pub fn star(&self, index: usize) -> &Star<T> {
        &self.stars[index]
    }

    /// All routes of the map, endpoints resolved, in input order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// The stars adjacent to `index`, each with the connecting route distance.
    pub fn neighbours(&self, index: usize) -> &[(usize, T)] {
        &self.adjacency[index]
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, index: usize) -> &str {
        &self.stars[index].name
    }
}
