// Demo: 0/1 knapsack.
//
// A hiker has a knapsack with a capacity of 15 kg and five items to choose
// from; maximize packed value without exceeding the capacity.

use knotip::{Direction, IntegerProgram, RowBounds};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let items = [
        ("Tent", 7.0, 150.0),
        ("Stove", 3.0, 90.0),
        ("Food", 4.0, 120.0),
        ("Water", 5.0, 100.0),
        ("Camera", 2.0, 80.0),
    ];
    let capacity = 15.0;

    let mut ip = IntegerProgram::new(Direction::Maximize, 1)?;

    let vars: Vec<_> = items
        .iter()
        .map(|&(_, _, value)| ip.make_variable(value))
        .collect();

    let weight_limit = ip.make_constraint(RowBounds::Upper(capacity));
    for (k, &(_, weight, _)) in items.iter().enumerate() {
        ip.add_constraint(weight_limit, vars[k], weight);
    }

    ip.commit()?;
    let status = ip.solve()?;
    println!("status: {} (backend: {})", status, ip.backend_name());

    let mut packed = 0.0;
    for (k, &(name, weight, value)) in items.iter().enumerate() {
        if status.has_solution() && ip.value(vars[k]) > 0.5 {
            packed += weight;
            println!("  take {:8} {:4} kg  ${}", name, weight, value);
        }
    }
    println!("  packed {} of {} kg", packed, capacity);
    if let Some(total) = ip.objective_value() {
        println!("  total value: ${}", total);
    }

    Ok(())
}
