//! Solves the textbook equations with every applicable method.
//!
//! Usage: `cargo run -p nonlin-observers --example textbook [PARAMS_FILE]`
//!
//! The optional file holds `left`, `right` and `epsilon`, one per line.
//! Set `RUST_LOG=debug` to see per-iteration records.

use std::{env, error::Error};

use nonlin_core::{Equation, IntervalParams};
use nonlin_observers::{Trace, TracingObserver};
use nonlin_solvers::{Config, Interval, Method, MethodKind, Newton, Start};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = match env::args().nth(1) {
        Some(path) => IntervalParams::from_file(path)?,
        None => "1\n2\n0.000001\n".parse()?,
    };
    let interval = Interval::try_from(&params)?;
    let config = Config::try_from(&params)?.with_log(true);

    let equations = [
        Equation::new("x^3 - x - 2", |x| x * x * x - x - 2.0),
        Equation::new("x^2 - 2", |x| x * x - 2.0),
        Equation::new("x - cos(x)", |x| x - x.cos()).with_derivative(|x| 1.0 + x.sin()),
    ];

    for equation in &equations {
        println!("== {equation} on [{}, {}]", interval.left(), interval.right());

        for kind in MethodKind::ALL {
            let start = if kind.uses_interval() {
                Start::Interval(interval)
            } else {
                Start::Point(interval.midpoint())
            };
            let method = match kind.build(equation, start, config) {
                Ok(method) => method,
                Err(err) => {
                    println!("-- {kind}: {err}");
                    continue;
                }
            };
            if let Err(reason) = method.check() {
                println!("-- {kind}: not applicable: {reason}");
                continue;
            }
            match method.solve(TracingObserver::new(kind.name())) {
                Ok(solution) => println!("-- {kind}\n{solution}"),
                Err(err) => println!("-- {kind}: failed: {err}"),
            }
        }

        let newton = Newton::new(equation, interval.midpoint(), config)?;
        let mut trace = Trace::new().with_decimal_places(params.decimal_places);
        newton.solve(&mut trace)?;
        println!("-- newton trace\n{trace}\n");
    }

    Ok(())
}
