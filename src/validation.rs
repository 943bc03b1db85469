use crate::graph::{RawRoute, Star};
use crate::StarMapError;
use num_traits::Float;
use std::collections::HashSet;

/// Checks parsed stars and routes before a `StarMap` is assembled. All engine
/// code downstream relies on these checks, in particular on distances and
/// coordinates being finite when ordering floats.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DatasetValidator<'a, T> {
    stars: &'a [Star<T>],
    routes: &'a [RawRoute<T>],
}

impl<'a, T: Float> DatasetValidator<'a, T> {
    pub(crate) fn new(stars: &'a [Star<T>], routes: &'a [RawRoute<T>]) -> Self {
        Self { stars, routes }
    }

    pub(crate) fn validate(&self) -> Result<(), StarMapError> {
        if self.stars.is_empty() {
            return Err(StarMapError::EmptyDataset);
        }
        self.validate_star_coordinates()?;
        self.validate_unique_labels()?;
        self.validate_routes()?;
        Ok(())
    }

    fn validate_star_coordinates(&self) -> Result<(), StarMapError> {
        for (n, star) in self.stars.iter().enumerate() {
            for element in &star.coords {
                if !element.is_finite() {
                    return Err(StarMapError::NonFiniteCoordinate(format!(
                        "{n}th star ({}) contains non-finite coordinate(s)",
                        star.name
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_unique_labels(&self) -> Result<(), StarMapError> {
        let mut seen = HashSet::new();
        for star in self.stars {
            if !seen.insert(star.name.as_str()) {
                return Err(StarMapError::DuplicateStar(star.name.clone()));
            }
        }
        Ok(())
    }

    fn validate_routes(&self) -> Result<(), StarMapError> {
        let labels: HashSet<&str> = self.stars.iter().map(|star| star.name.as_str()).collect();
        for route in self.routes {
            for endpoint in [&route.from, &route.to] {
                if !labels.contains(endpoint.as_str()) {
                    return Err(StarMapError::UnknownStar(format!(
                        "route {}-{} references unknown star {endpoint}",
                        route.from, route.to
                    )));
                }
            }
            if !route.distance.is_finite() || route.distance < T::zero() {
                return Err(StarMapError::InvalidDistance(format!(
                    "route {}-{} must have a finite, non-negative distance",
                    route.from, route.to
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_route_distance_is_rejected() {
        let stars = vec![
            Star::new("A", [0.0, 0.0, 0.0], 1, 1),
            Star::new("B", [1.0, 0.0, 0.0], 1, 1),
        ];
        let routes = vec![RawRoute {
            from: String::from("A"),
            to: String::from("B"),
            distance: -1.0,
        }];
        let result = DatasetValidator::new(&stars, &routes).validate();
        assert!(matches!(result, Err(StarMapError::InvalidDistance(..))));
    }

    #[test]
    fn nan_route_distance_is_rejected() {
        let stars = vec![
            Star::new("A", [0.0, 0.0, 0.0], 1, 1),
            Star::new("B", [1.0, 0.0, 0.0], 1, 1),
        ];
        let routes = vec![RawRoute {
            from: String::from("A"),
            to: String::from("B"),
            distance: f64::NAN,
        }];
        let result = DatasetValidator::new(&stars, &routes).validate();
        assert!(matches!(result, Err(StarMapError::InvalidDistance(..))));
    }

    #[test]
    fn valid_dataset_passes() {
        let stars = vec![
            Star::new("A", [0.0, 0.0, 0.0], 1, 1),
            Star::new("B", [1.0, 0.0, 0.0], 1, 1),
        ];
        let routes = vec![RawRoute {
            from: String::from("A"),
            to: String::from("B"),
            distance: 1.0,
        }];
        assert!(DatasetValidator::new(&stars, &routes).validate().is_ok());
    }
}
