use lib::cli::{Bencher, Mode, Opts};
use lib::prelude::*;

/// Answer for the bundled schematic, used to validate benchmark runs.
const EXPECT: Option<u64> = Some(467835);

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let (input, path) = lib::input!("gears.txt");

    match opts.mode {
        Mode::Default => {
            let total = solve(input).with_context(|| anyhow!("{path}"))?;
            println!("The sum of all the gear ratios is {total}.");
        }
        Mode::Bench => {
            let mut bencher = Bencher::new();
            bencher.iter(&opts, EXPECT, || solve(input))?;
        }
    }

    Ok(())
}

fn solve(input: IStr) -> Result<u64> {
    let mut schematic = Schematic::from_input(input)?;
    Ok(schematic.sum_gear_ratios())
}
