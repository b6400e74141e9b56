//! Tests for exact backtracking search with a skip budget

#[cfg(test)]
mod tests {
    use crate::{diagram, domino};
    use polypack::algorithm::backtrack::BacktrackSolver;
    use polypack::compile;
    use polypack::spatial::Grid;

    // Tests an exact tiling is found without skips
    // Verified by returning false when the budget is zero
    #[test]
    fn test_solves_domino_tiling() {
        let catalog = compile(&[domino()]).unwrap();
        let mut grid = Grid::new(3, 2).unwrap();
        let mut pieces = vec![0, 0, 0];

        let mut solver = BacktrackSolver::new(&mut grid, &catalog, &mut pieces);
        assert!(solver.solve(0));
        assert!(solver.stats.nodes > 0);
        assert_eq!(grid.occupied_count(), 6);
    }

    // Tests arrangements the first-fit packer misses are found
    // Verified by exploring only the first orientation of each family
    #[test]
    fn test_solves_mixed_orientation_tiling() {
        let catalog = compile(&[diagram(&["###", "###"])]).unwrap();
        let mut grid = Grid::new(12, 5).unwrap();
        let mut pieces = vec![0; 10];

        assert!(BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(0));
        assert_eq!(grid.occupied_count(), 60);
    }

    // Tests cells no piece can cover consume the skip budget
    // Verified by allowing a skip when the budget is exhausted
    #[test]
    fn test_skip_budget_is_respected() {
        let catalog = compile(&[diagram(&[".#.", "###", ".#."])]).unwrap();

        let mut grid = Grid::new(3, 4).unwrap();
        let mut pieces = vec![0];
        let mut solver = BacktrackSolver::new(&mut grid, &catalog, &mut pieces);
        assert!(solver.solve(1));
        assert_eq!(solver.stats.skips, 1);
        assert_eq!(grid.occupied_count(), 6);

        let mut grid = Grid::new(3, 4).unwrap();
        let mut pieces = vec![0];
        assert!(!BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(0));
        assert_eq!(grid.occupied_count(), 0);
    }

    // Tests an impossible piece fails even with spare cells
    // Verified by treating a missing grid cell as success
    #[test]
    fn test_piece_that_never_fits() {
        let catalog = compile(&[diagram(&["###"])]).unwrap();
        let mut grid = Grid::new(2, 2).unwrap();
        let mut pieces = vec![0];
        assert!(!BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(1));
        assert_eq!(grid.occupied_count(), 0);
    }

    // Tests the placement list is restored after both verdicts
    // Verified by omitting the swap back after a candidate
    #[test]
    fn test_placement_list_is_restored() {
        let catalog = compile(&[domino(), diagram(&["#", "#", "#"]), diagram(&["#"])]).unwrap();
        let original = vec![2, 0, 1, 0, 2];

        let mut grid = Grid::new(3, 3).unwrap();
        let mut pieces = original.clone();
        assert!(BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(0));
        assert_eq!(pieces, original);

        let mut grid = Grid::new(2, 2).unwrap();
        let mut pieces = original.clone();
        assert!(!BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(0));
        assert_eq!(pieces, original);
    }

    // Tests an empty placement list succeeds immediately
    // Verified by requiring an empty cell before checking for completion
    #[test]
    fn test_no_pieces() {
        let catalog = compile(&[domino()]).unwrap();
        let mut grid = Grid::new(0, 0).unwrap();
        let mut pieces = Vec::new();
        assert!(BacktrackSolver::new(&mut grid, &catalog, &mut pieces).solve(0));
    }

    // Tests a long run of wasted cells fails without deepening the recursion
    // Verified by recursing once per skipped cell
    #[test]
    fn test_long_strip_exhausts_budget() {
        let catalog = compile(&[diagram(&["##", "##"])]).unwrap();
        let mut grid = Grid::new(1, 200_000).unwrap();
        let mut pieces = vec![0];

        let mut solver = BacktrackSolver::new(&mut grid, &catalog, &mut pieces);
        assert!(!solver.solve(199_996));
        assert_eq!(solver.stats.skips, 199_996);
        assert_eq!(grid.occupied_count(), 0);
    }

    // Tests a piece is still found after a long run of skips
    // Verified by clearing skipped cells before reporting success
    #[test]
    fn test_fit_after_long_skip_run() {
        let catalog = compile(&[diagram(&["##", "##"])]).unwrap();
        let mut grid = Grid::new(2, 50_000).unwrap();
        for row in 0..49_000 {
            grid.set_cell(row, 0);
        }

        let mut pieces = vec![0];
        let mut solver = BacktrackSolver::new(&mut grid, &catalog, &mut pieces);
        assert!(solver.solve(99_996));
        assert_eq!(solver.stats.skips, 49_000);
        assert_eq!(grid.occupied_count(), 98_004);

        for row in 0..50_000 {
            grid.clear_cell(row, 1);
        }
        grid.clear_cell(49_000, 0);
        grid.clear_cell(49_001, 0);
        assert_eq!(grid.occupied_count(), 49_000);

        let mut pieces = vec![0];
        let mut solver = BacktrackSolver::new(&mut grid, &catalog, &mut pieces);
        assert!(!solver.solve(48_999));
        assert_eq!(grid.occupied_count(), 49_000);
    }
}
