/*!
    Program that generates a file of random integers, used as input data
    for a quick-sort program under test.
 ```
Usage:
   qsort-gen N
where:
   N - number of integers to generate; each one is drawn uniformly from
       [-100000, 100000) and written to `qsort.in` in draw order
```
   Output format: every integer in decimal followed by a single space
   (the last one included), then one newline.
 */

#[macro_use] extern crate anyhow;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;

mod gen;

/// Relative path of the generated file, fixed by the sort program that consumes it.
const OUT_PATH: &str = "qsort.in";

/// Creates the random source used for a normal run.
/// Tests plug seeded or hand-fed sources into the same seam instead.
fn source_factory() -> impl gen::UnitSource {
    gen::RngSource(rand::thread_rng())
}

/// Program main function.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!(
r#"Missing command line parameter

Usage:
   {} N
where:
   N - number of integers to generate; each one is drawn uniformly from
       [-100000, 100000) and written to `{}` in draw order
"#, args[0], OUT_PATH);
    }

    // Parsed as signed so that a negative count reaches draw_list,
    // which renders it as an empty sequence.
    let count = i64::from_str_radix(&args[1], 10)?;

    let mut source = source_factory();
    let values = gen::draw_list(&mut source, count);

    let mut out = BufWriter::new(File::create(OUT_PATH)?);
    gen::write_list(&mut out, &values)?;
    out.flush()?;
    Ok(())
}
