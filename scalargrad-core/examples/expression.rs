//! # Expression Gradient Walkthrough
//!
//! Builds `exp((2 * 3) / 4)`, prints the expression tree, computes the
//! gradients, prints it again, then clears the gradients and prints a
//! third time.
//!
//! ## Execution
//! `cargo run --example expression`

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let mut graph = Graph::new();
    let two = graph.leaf(2.0)?;
    let three = graph.leaf(3.0)?;
    let four = graph.leaf(4.0)?;
    let product = graph.times(two, three)?;
    let quotient = graph.div(product, four)?;
    let result = graph.exp(quotient)?;

    println!("{}", graph.display(result));

    println!("\ncomputing gradients...\n");
    graph.backward(result)?;
    println!("{}", graph.display(result));

    println!("\nzeroing computed gradients...\n");
    graph.zero_grad(result)?;
    println!("{}", graph.display(result));

    Ok(())
}
