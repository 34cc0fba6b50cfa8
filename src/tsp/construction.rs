//! Nearest-neighbour construction heuristic.

use super::pool::{PooledTour, TourPool};

/// Builds a greedy tour in a fresh pool slot.
///
/// Starts at node 0 and repeatedly moves to the cheapest unvisited node,
/// breaking ties by the lowest index. A round trip closes back at node 0.
/// An open tour always ends at node `n - 1`: that node is withheld from
/// the greedy walk and appended last.
///
/// # Complexity
/// O(n²)
pub fn nearest_neighbour(pool: &mut TourPool<'_>) -> PooledTour {
    let n = pool.node_count();
    let roundtrip = pool.roundtrip();
    let matrix = pool.matrix();

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut remaining = n - 1;
    if !roundtrip && n > 1 {
        visited[n - 1] = true;
        remaining -= 1;
    }

    let handle = pool.create();
    let path = pool.tour_mut(&handle);
    let mut pos = 0;
    path[pos] = 0;
    pos += 1;

    let mut current = 0;
    while remaining > 0 {
        let mut nearest = None;
        for (node, &cost) in matrix.row(current).iter().enumerate() {
            if visited[node] {
                continue;
            }
            match nearest {
                Some((_, best)) if cost >= best => {}
                _ => nearest = Some((node, cost)),
            }
        }
        let Some((node, _)) = nearest else {
            break;
        };

        path[pos] = node;
        pos += 1;
        visited[node] = true;
        remaining -= 1;
        current = node;
    }

    if roundtrip {
        path[pos] = 0;
    } else if n > 1 {
        path[pos] = n - 1;
    }

    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::CostMatrix;

    fn build(rows: &[Vec<f64>], roundtrip: bool) -> Vec<usize> {
        let m = CostMatrix::from_rows(rows).unwrap();
        let mut pool = TourPool::new(&m, roundtrip);
        let tour = nearest_neighbour(&mut pool);
        pool.tour(&tour).to_vec()
    }

    #[test]
    fn test_single_node() {
        assert_eq!(build(&[vec![0.0]], false), vec![0]);
        assert_eq!(build(&[vec![0.0]], true), vec![0, 0]);
    }

    #[test]
    fn test_two_nodes() {
        let rows = [vec![0.0, 1.0], vec![1.0, 0.0]];
        assert_eq!(build(&rows, false), vec![0, 1]);
        assert_eq!(build(&rows, true), vec![0, 1, 0]);
    }

    #[test]
    fn test_three_nodes() {
        let rows = [
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0],
        ];
        assert_eq!(build(&rows, false), vec![0, 1, 2]);
        assert_eq!(build(&rows, true), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_symmetric_triangle_round_trip() {
        let rows = [
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ];
        let m = CostMatrix::from_rows(&rows).unwrap();
        let mut pool = TourPool::new(&m, true);
        let mut tour = nearest_neighbour(&mut pool);
        assert_eq!(pool.tour(&tour), &[0, 1, 2, 0]);
        assert_eq!(tour.ensure_cost(&pool), 4.0);
    }

    #[test]
    fn test_follows_cheapest_edge() {
        // 0 -> 3 -> 1 -> 2 is the greedy chain.
        let rows = [
            vec![0.0, 5.0, 9.0, 1.0],
            vec![5.0, 0.0, 2.0, 7.0],
            vec![9.0, 2.0, 0.0, 8.0],
            vec![1.0, 3.0, 6.0, 0.0],
        ];
        assert_eq!(build(&rows, true), vec![0, 3, 1, 2, 0]);
    }

    #[test]
    fn test_open_tour_withholds_last_node() {
        // Node 3 is cheapest from 0, but an open tour must end there.
        let rows = [
            vec![0.0, 5.0, 9.0, 1.0],
            vec![5.0, 0.0, 2.0, 7.0],
            vec![9.0, 2.0, 0.0, 8.0],
            vec![1.0, 3.0, 6.0, 0.0],
        ];
        assert_eq!(build(&rows, false), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        let rows = [
            vec![0.0, 4.0, 4.0, 4.0, 4.0],
            vec![4.0, 0.0, 4.0, 4.0, 4.0],
            vec![4.0, 4.0, 0.0, 4.0, 4.0],
            vec![4.0, 4.0, 4.0, 0.0, 4.0],
            vec![4.0, 4.0, 4.0, 4.0, 0.0],
        ];
        assert_eq!(build(&rows, true), vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_uses_asymmetric_outgoing_costs() {
        // Only outgoing costs from the current node matter.
        let rows = [
            vec![0.0, 9.0, 1.0],
            vec![1.0, 0.0, 9.0],
            vec![9.0, 1.0, 0.0],
        ];
        assert_eq!(build(&rows, true), vec![0, 2, 1, 0]);
    }
}
