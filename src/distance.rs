use num_traits::Float;

/// Straight-line distance between two 3D coordinates. Route distances in a
/// star map are always Euclidean.
pub(crate) fn euclidean_distance<T: Float>(a: &[T; 3], b: &[T; 3]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((*x) - (*y)) * ((*x) - (*y)))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        let a = [0.0, 0.0, 0.0];
        let b = [2.0, 3.0, 6.0];
        assert!((euclidean_distance(&a, &b) - 7.0_f64).abs() < 1e-12);
    }

    #[test]
    fn euclidean_is_symmetric() {
        let a = [1.5_f32, -2.0, 4.0];
        let b = [3.0, 0.5, -1.0];
        assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
    }
}
