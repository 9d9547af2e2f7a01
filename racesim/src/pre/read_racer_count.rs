use anyhow::Context;
use std::io::{BufRead, Write};

/// read_racer_count prompts on the inserted output until the inserted input yields a line that
/// parses as an integer within the allowed range, and returns that integer. Invalid lines only
/// cause a message and a new prompt, i.e. on an interactive stdin the retry loop is unbounded.
/// An exhausted input (EOF) raises an error such that bounded input sources (e.g. in tests or
/// with a closed stdin) terminate the loop.
pub fn read_racer_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    no_racers_range: [u32; 2],
) -> anyhow::Result<u32> {
    loop {
        // prompt without a trailing newline (flush required since stdout is line-buffered)
        write!(
            output,
            "Enter the number of Turtles ({}-{}): ",
            no_racers_range[0], no_racers_range[1]
        )
        .context("Failed to write the prompt!")?;
        output.flush().context("Failed to flush the prompt!")?;

        // read one line, EOF is reported as zero bytes read
        let mut line = String::new();
        let no_bytes = input
            .read_line(&mut line)
            .context("Failed to read from the input!")?;

        if no_bytes == 0 {
            return Err(anyhow::anyhow!(
                "Input ended before a valid number of turtles was entered!"
            ));
        }

        // a negative number does not parse as u32 and is therefore reported as non-numeric, which
        // matches the original game behavior
        match line.trim().parse::<u32>() {
            Ok(no_racers) => {
                if no_racers_range[0] <= no_racers && no_racers <= no_racers_range[1] {
                    return Ok(no_racers);
                }
                writeln!(
                    output,
                    "Number of turtles must be between {} and {}!",
                    no_racers_range[0], no_racers_range[1]
                )
                .context("Failed to write the range message!")?;
            }
            Err(_) => {
                writeln!(output, "Invalid input! Please enter a numeric value.")
                    .context("Failed to write the invalid input message!")?;
            }
        }
    }
}
