//! Basic example of using the recursion core
//!
//! Run with `RUST_LOG=recursion_core=debug` to see the library's trace.

use recursion_core::{
    find, hanoi_plan, l_system_expand, l_system_find, memoize, memoize_sequence, merge_sort,
    pascal_triangle, power_set, sierpinski, MemoTable, MotionPolicy, PegBoard, Point, Recurrence,
    RuleSet, Triangle,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Memoized recurrences, sharing one table across calls
    let fib = Recurrence::fibonacci();
    let mut table = MemoTable::new();
    println!("fib(8) = {}", memoize(8, &fib, Some(&mut table))?);
    println!("fib(90) = {}", memoize(90, &fib, Some(&mut table))?);
    println!(
        "table: {} entries, {} computed, {} hits\n",
        table.len(),
        table.computed(),
        table.hits()
    );
    println!("factorials: {:?}\n", memoize_sequence(10, &Recurrence::factorial(), None)?);

    // Divide and conquer
    let sorted = merge_sort(&[8, 4, 1, 6, 5, 9, 2, 0, 3]);
    println!("sorted: {:?}", sorted);
    println!("find 6: {:?}", find(&sorted, &6));
    println!("find 7: {:?}\n", find(&sorted, &7));

    // Combinatorics
    println!("power set of [a, b, c]: {:?}", power_set(&['a', 'b', 'c']));
    for row in pascal_triangle(6)? {
        println!("{:?}", row);
    }
    println!();

    // Tower of Hanoi
    for policy in [MotionPolicy::Simple, MotionPolicy::Adjacent] {
        let plan = hanoi_plan(3, 'A', 'C', 'B', policy)?;
        println!("{} policy, {} moves:", policy, plan.len());
        for mv in &plan {
            println!("  {}", mv);
        }
        PegBoard::verify(&plan, 'A', 'C', 'B')?;
    }
    println!();

    // Fractals
    let outline = Triangle::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.5, 0.866),
    );
    let drawn = sierpinski(3, outline)?;
    println!("sierpinski order 3: {} triangles", drawn.len());
    println!("as JSON: {}", serde_json::to_string(&drawn[..2])?);

    let algae = RuleSet::algae();
    println!("algae after 5 rewrites: {}", l_system_expand("A", &algae, 5)?);
    match l_system_find("A", &algae, "BAB", 10)? {
        Some(hit) => println!(
            "'BAB' first appears at iteration {}, index {}",
            hit.iteration, hit.index
        ),
        None => println!("'BAB' never appears"),
    }

    Ok(())
}
