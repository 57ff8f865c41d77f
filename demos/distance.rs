//! Example: compare a few word pairs with all three engines.
//!
//! Run with:
//! `cargo run --example distance`

use dl_engines::{
    engines::{BerghelRoach, LowranceWagner, Ukkonen},
    traits::DistanceEngine,
};

fn main() {
    let pairs: [(&str, &str); 5] = [
        ("kitten", "sitting"),
        ("ab", "ba"),
        ("sunday", "saturday"),
        ("gumbo", "gambol"),
        ("ca", "abc"),
    ];
    let longest = pairs
        .iter()
        .map(|(a, b)| a.len().max(b.len()))
        .max()
        .unwrap_or(0);

    let mut engines: Vec<Box<dyn DistanceEngine>> = vec![
        Box::new(LowranceWagner),
        Box::new(Ukkonen),
        Box::new(BerghelRoach::with_capacity(longest)),
    ];

    for (a, b) in pairs {
        let mut line = format!("{a:>8} / {b:<8}");
        for engine in engines.iter_mut() {
            match engine.compute(a.as_bytes(), b.as_bytes()) {
                Ok(d) => line.push_str(&format!("  {}={d}", engine.name())),
                Err(err) => line.push_str(&format!("  {}: {err}", engine.name())),
            }
        }
        println!("{line}");
    }

    // `ca` -> `abc` needs an insertion between the transposed symbols, which
    // only the full-matrix engine allows.
    println!("note: lw counts edits between transposed symbols; uk and br do not");
}
