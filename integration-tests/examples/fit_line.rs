//! Fits a line to points read from standard input.
//!
//! The input is a point count `n` followed by `n` lines of `x y`:
//!
//! ```text
//! 3
//! 0 1
//! 1 3
//! 2 5
//! ```
//!
//! Prints the fitted `y = a x + b` as `a=<a>,b=<b>`.
//!
//! Run with `cargo run -p integration-tests --example fit_line < points.txt`.

use std::{error::Error, io::Read};

use integration_tests::{fit_line, parse_points};

fn main() -> Result<(), Box<dyn Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let points = parse_points(&input)?;
    let (a, b) = fit_line(&points)?;

    println!("a={a},b={b}");
    Ok(())
}
