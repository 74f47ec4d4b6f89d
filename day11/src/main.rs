use common::{time, Pos};
use itertools::Itertools;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let input = common::input(env!("CARGO_MANIFEST_DIR"))?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// For every index, how many of the lines before it hold no galaxy.
fn empty_before(occupied: &[bool]) -> Vec<i64> {
    occupied
        .iter()
        .scan(0, |empty, &full| {
            let before = *empty;
            if !full {
                *empty += 1;
            }
            Some(before)
        })
        .collect()
}

/// Sum of pairwise distances after every empty row and column has become
/// `factor` lines wide.
fn distances(input: &str, factor: i64) -> i64 {
    let galaxies = input
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.char_indices()
                .filter(|&(_, c)| c == '#')
                .map(move |(x, _)| (x, y))
        })
        .collect_vec();

    let w = input.lines().map(str::len).max().unwrap_or(0);
    let h = input.lines().count();

    let mut rows = vec![false; h];
    let mut cols = vec![false; w];
    for &(x, y) in &galaxies {
        rows[y] = true;
        cols[x] = true;
    }

    let (rows_before, cols_before) = (empty_before(&rows), empty_before(&cols));
    debug!(
        "{} empty rows, {} empty columns",
        rows.iter().filter(|&&r| !r).count(),
        cols.iter().filter(|&&c| !c).count()
    );

    let expanded: Vec<Pos> = galaxies
        .into_iter()
        .map(|(x, y)| {
            (
                x as i64 + cols_before[x] * (factor - 1),
                y as i64 + rows_before[y] * (factor - 1),
            )
        })
        .collect();

    expanded
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (a.0 - b.0).abs() + (a.1 - b.1).abs())
        .sum()
}

fn solve(input: &str) -> i64 {
    distances(input, 2)
}

fn bonus(input: &str) -> i64 {
    distances(input, 1_000_000)
}

#[test]
fn test() {
    let example_input = "...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

    assert_eq!(solve(example_input), 374);
    assert_eq!(distances(example_input, 10), 1030);
    assert_eq!(distances(example_input, 100), 8410);
}
