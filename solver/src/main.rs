use split::search::correct_group_sizes;
use split::solver::RegionSolver;
use split::Puzzle;

fn main() {
    let mut patterns = std::env::args().skip(1).collect::<Vec<_>>();
    if patterns.is_empty() {
        // from the "2 + 1 = 3" set
        patterns = vec!["21 |12 |  2".to_owned(), "2 2|   |1 1".to_owned()];
    }

    for pattern in patterns {
        let puzzle = Puzzle::from_pattern(&pattern);
        print!("{:?}\n{}", pattern, puzzle);

        let found = correct_group_sizes(&puzzle);
        if found.is_empty() {
            println!("no correct loops\n");
            continue;
        }

        let solver = RegionSolver::from(&puzzle);
        for (group_size, witness) in found {
            println!("groups of {}: {}", group_size, witness);
            print!("{}", solver.solve(&witness));
        }
        println!();
    }
}
