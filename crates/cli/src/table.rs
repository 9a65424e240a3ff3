use std::io::{self, Write};

use marcher_solvers::transient::euler::Trajectory;

/// Writes a trajectory as a fixed-width step / time / value table.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_table<W: Write>(out: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(out, "{:<5}{:<10}{:<15}", "Step", "t", "y")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (step, point) in trajectory.points().enumerate() {
        writeln!(out, "{step:<5}{:<10.4}{:<15.6}", point.t, point.y)?;
    }
    Ok(())
}
