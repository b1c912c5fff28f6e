use anyhow::{Context, Result};
use clap::Parser;

use percolate::Percolation;

/// Parse a site given as "ROW,COL" (both 0-indexed).
fn parse_site(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{s}'"))?;

    let row: usize = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col: usize = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;

    Ok((row, col))
}

/// percolate - open sites on an n x n grid and report connectivity
///
/// Opens the given sites in order, then reports which of them are full
/// (connected to the top row) and whether the grid percolates top to bottom.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n (the grid is n x n)
    #[clap(short = 'n', long = "size", default_value = "3")]
    size: usize,

    /// Sites to open, 0-indexed. With no sites given, opens the middle
    /// column from top to bottom.
    #[clap(value_name = "ROW,COL", num_args = 0.., value_parser = parse_site)]
    sites: Vec<(usize, usize)>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Percolation::new(args.size)
        .with_context(|| format!("cannot build a {0}x{0} grid", args.size))?;

    let sites = if args.sites.is_empty() {
        (0..args.size).map(|row| (row, args.size / 2)).collect()
    } else {
        args.sites
    };

    for &(row, col) in &sites {
        grid.open(row, col)
            .with_context(|| format!("cannot open site ({row}, {col})"))?;
    }

    for &(row, col) in &sites {
        println!(
            "site ({row}, {col}): open={} full={}",
            grid.is_open(row, col)?,
            grid.is_full(row, col)?
        );
    }

    println!(
        "{} of {} sites open",
        grid.open_site_count(),
        args.size * args.size
    );
    println!("percolates: {}", grid.percolates());

    Ok(())
}
