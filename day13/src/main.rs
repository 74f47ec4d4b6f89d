use common::{parse_data_on_empty_rows, time, transpose};
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

/// Rows above the horizontal mirror line at which exactly `smudges` cells
/// differ from their reflection.
fn reflection(rows: &[Vec<u8>], smudges: usize) -> Option<usize> {
    (1..rows.len()).find(|&k| {
        (0..k)
            .rev()
            .zip(k..rows.len())
            .map(|(a, b)| {
                rows[a]
                    .iter()
                    .zip(&rows[b])
                    .filter(|(x, y)| x != y)
                    .count()
            })
            .sum::<usize>()
            == smudges
    })
}

fn summarize(input: &str, smudges: usize) -> usize {
    parse_data_on_empty_rows(input)
        .into_iter()
        .map(|pattern| {
            let rows = pattern
                .iter()
                .map(|line| line.as_bytes().to_vec())
                .collect::<Vec<_>>();

            if let Some(k) = reflection(&rows, smudges) {
                debug!("horizontal mirror below row {k}");
                100 * k
            } else if let Some(k) = reflection(&transpose(&rows), smudges) {
                debug!("vertical mirror right of column {k}");
                k
            } else {
                panic!("no mirror in pattern:\n{}", pattern.join("\n"))
            }
        })
        .sum()
}

fn solve(input: &str) -> usize {
    summarize(input, 0)
}

fn bonus(input: &str) -> usize {
    summarize(input, 1)
}

#[test]
fn test() {
    let example_input = "#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

    assert_eq!(solve(example_input), 405);
    assert_eq!(bonus(example_input), 400);
}
