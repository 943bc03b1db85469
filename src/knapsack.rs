use crate::graph::Star;
use crate::StarMapError;
use num_traits::Float;

/// The (N+1) x (capacity+1) dynamic programming grid. `best_profit(i, w)` is
/// the maximum profit achievable using the first `i` stars under weight bound
/// `w`; values are non-decreasing along both axes. Exposed as part of the
/// solution because the surrounding tooling renders it for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackTable {
    cells: Vec<Vec<u32>>,
}

impl KnapsackTable {
    fn build<T: Float>(stars: &[Star<T>], capacity: usize) -> Self {
        let n_stars = stars.len();
        let mut cells = vec![vec![0_u32; capacity + 1]; n_stars + 1];

        for i in 1..=n_stars {
            let star = &stars[i - 1];
            let weight = star.weight as usize;
            // Column 0 is computed too: a zero-weight star fits under any
            // bound, including an exhausted one
            for w in 0..=capacity {
                cells[i][w] = if weight <= w {
                    cells[i - 1][w].max(cells[i - 1][w - weight] + star.profit)
                } else {
                    cells[i - 1][w]
                };
            }
        }

        KnapsackTable { cells }
    }

    pub fn best_profit(&self, items: usize, capacity_used: usize) -> u32 {
        self.cells[items][capacity_used]
    }

    /// Number of item rows, excluding the all-zero row 0.
    pub fn n_items(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn capacity(&self) -> usize {
        self.cells[0].len() - 1
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }
}

/// An optimal 0/1 knapsack selection. `selected` holds indices into the star
/// list passed to [`knapsack`], in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution {
    pub total_profit: u32,
    pub total_weight: u32,
    pub selected: Vec<usize>,
    pub table: KnapsackTable,
}

/// Solves the 0/1 knapsack problem over the stars' (weight, profit) pairs,
/// maximising total profit under the weight bound `capacity`.
///
/// Independent of the route set: only the star list is consumed. The selected
/// subset is reconstructed by walking the table backwards from
/// `(N, capacity)`, taking star `i-1` whenever including it changed the value
/// at row `i`.
///
/// # Errors
/// * `EmptyDataset` if `stars` is empty.
pub fn knapsack<T: Float>(
    stars: &[Star<T>],
    capacity: usize,
) -> Result<KnapsackSolution, StarMapError> {
    if stars.is_empty() {
        return Err(StarMapError::EmptyDataset);
    }

    let table = KnapsackTable::build(stars, capacity);

    let mut selected = Vec::new();
    let mut w = capacity;
    // Every row is visited, even once w reaches 0, so zero-weight stars are
    // still picked up
    for i in (1..=stars.len()).rev() {
        if table.best_profit(i, w) != table.best_profit(i - 1, w) {
            selected.push(i - 1);
            w -= stars[i - 1].weight as usize;
        }
    }
    // The walk collects stars in reverse; restore original order
    selected.reverse();

    let total_weight = selected.iter().map(|&i| stars[i].weight).sum();

    Ok(KnapsackSolution {
        total_profit: table.best_profit(stars.len(), capacity),
        total_weight,
        selected,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(name: &str, weight: u32, profit: u32) -> Star<f64> {
        Star::new(name, [0.0, 0.0, 0.0], weight, profit)
    }

    #[test]
    fn picks_the_best_pair_under_the_bound() {
        let stars = vec![star("A", 2, 3), star("B", 3, 4), star("C", 4, 5)];
        let solution = knapsack(&stars, 5).unwrap();
        assert_eq!(7, solution.total_profit);
        assert_eq!(5, solution.total_weight);
        assert_eq!(vec![0, 1], solution.selected);
    }

    #[test]
    fn profit_equals_final_table_cell() {
        let stars = vec![star("A", 1, 10), star("B", 4, 40), star("C", 3, 50)];
        let solution = knapsack(&stars, 6).unwrap();
        assert_eq!(
            solution.total_profit,
            solution.table.best_profit(stars.len(), 6)
        );
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let stars = vec![star("A", 2, 3), star("B", 3, 4)];
        let solution = knapsack(&stars, 0).unwrap();
        assert_eq!(0, solution.total_profit);
        assert!(solution.selected.is_empty());
    }

    #[test]
    fn zero_weight_star_is_always_taken() {
        // B alone fills the capacity; A costs nothing and must still be
        // included even though the remaining bound is 0.
        let stars = vec![star("A", 0, 5), star("B", 5, 10)];
        let solution = knapsack(&stars, 5).unwrap();
        assert_eq!(15, solution.total_profit);
        assert_eq!(5, solution.total_weight);
        assert_eq!(vec![0, 1], solution.selected);
    }

    #[test]
    fn zero_weight_star_is_taken_at_zero_capacity() {
        let stars = vec![star("A", 0, 5), star("B", 3, 4)];
        let solution = knapsack(&stars, 0).unwrap();
        assert_eq!(5, solution.total_profit);
        assert_eq!(0, solution.total_weight);
        assert_eq!(vec![0], solution.selected);
    }

    #[test]
    fn item_heavier_than_capacity_is_never_taken() {
        let stars = vec![star("A", 10, 100), star("B", 2, 1)];
        let solution = knapsack(&stars, 5).unwrap();
        assert_eq!(1, solution.total_profit);
        assert_eq!(vec![1], solution.selected);
    }

    #[test]
    fn table_is_monotone_along_both_axes() {
        let stars = vec![star("A", 2, 3), star("B", 3, 4), star("C", 4, 5)];
        let solution = knapsack(&stars, 8).unwrap();
        let table = &solution.table;
        for i in 0..=table.n_items() {
            for w in 0..=table.capacity() {
                if i > 0 {
                    assert!(table.best_profit(i, w) >= table.best_profit(i - 1, w));
                }
                if w > 0 {
                    assert!(table.best_profit(i, w) >= table.best_profit(i, w - 1));
                }
            }
        }
    }

    #[test]
    fn empty_star_list() {
        let result = knapsack::<f64>(&[], 5);
        assert!(matches!(result, Err(StarMapError::EmptyDataset)));
    }
}
