// Demo: pick a maximum-scoring set of RNA base pairs.
//
// Each candidate pair (i, j) gets a binary variable weighted by its pairing
// score, and each sequence position may participate in at most one pair.
// This is the shape of model the adapter exists to build.

use knotip::{Direction, IntegerProgram, RowBounds};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let sequence = "GGGAAAUCCC";

    // candidate pairs as (i, j, score), 0-based positions
    let candidates = [
        (0usize, 9usize, 3.0),
        (1, 8, 2.8),
        (2, 7, 2.5),
        (0, 7, 1.1),
        (2, 9, 0.9),
        (3, 6, 0.4),
    ];

    let mut ip = IntegerProgram::new(Direction::Maximize, 1)?;

    let pair_vars: Vec<_> = candidates
        .iter()
        .map(|&(_, _, score)| ip.make_variable(score))
        .collect();

    // each position joins at most one pair
    for pos in 0..sequence.len() {
        let row = ip.make_constraint(RowBounds::Upper(1.0));
        for (k, &(i, j, _)) in candidates.iter().enumerate() {
            if i == pos || j == pos {
                ip.add_constraint(row, pair_vars[k], 1.0);
            }
        }
    }

    ip.commit()?;
    let status = ip.solve()?;

    println!("{} [{}]: {}", sequence, ip.backend_name(), status);
    for (k, &(i, j, score)) in candidates.iter().enumerate() {
        if status.has_solution() && ip.value(pair_vars[k]) > 0.5 {
            println!("  pair {}-{}  (score {})", i, j, score);
        }
    }
    if let Some(total) = ip.objective_value() {
        println!("  total score: {}", total);
    }

    Ok(())
}
