//! `marcher` — integrate `dy/dt = f(t, y)` with explicit Euler and print the
//! trajectory.
//!
//! # Usage
//!
//! ```text
//! marcher                                  # 7t²(y − 4)^(3/5) from (0, 4), h = 0.05, 50 steps
//! marcher -e decay -k 0.5 --y0 1 -s 0.1 -n 20
//! RUST_LOG=trace marcher -e growth -n 5
//! cargo run -p marcher-cli --features plot -- -e decay --plot
//! ```

use std::{error::Error, io};

use clap::Parser;
use env_logger::Env;
use marcher_cli::{Cli, run, write_table};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    let trajectory = run(&cli)?;

    write_table(&mut io::stdout().lock(), &trajectory)?;

    #[cfg(feature = "plot")]
    if cli.plot {
        plot(&cli, &trajectory)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn plot(
    cli: &Cli,
    trajectory: &marcher_solvers::transient::euler::Trajectory,
) -> Result<(), Box<dyn Error>> {
    use marcher_observers::{PlotObserver, ShowConfig};

    let mut obs = PlotObserver::<1>::new(["Euler approximation"]);
    for point in trajectory.points() {
        obs.record(point.t, [Some(point.y)]);
    }

    obs.show(
        ShowConfig::new()
            .title(format!(
                "{} (h = {}, {} steps)",
                cli.equation.describe(cli.rate),
                cli.step,
                cli.steps.get()
            ))
            .legend()
            .markers(),
    )?;

    Ok(())
}
