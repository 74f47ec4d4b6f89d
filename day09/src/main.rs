use common::{numbers, time};
use itertools::Itertools;
use tracing::trace;

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

fn differences(seq: &[i64]) -> Vec<i64> {
    seq.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

// stop on all zeroes; a zero *sum* isn't enough (e.g. -1 0 1)
fn extrapolate(seq: &[i64]) -> i64 {
    trace!("{seq:?}");

    if seq.iter().all(|&n| n == 0) {
        return 0;
    }

    seq[seq.len() - 1] + extrapolate(&differences(seq))
}

fn histories(input: &str) -> impl Iterator<Item = Vec<i64>> + '_ {
    input.lines().map(numbers::<i64>)
}

fn solve(input: &str) -> i64 {
    histories(input).map(|seq| extrapolate(&seq)).sum()
}

fn bonus(input: &str) -> i64 {
    histories(input)
        .map(|mut seq| {
            seq.reverse();
            extrapolate(&seq)
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45";

    assert_eq!(solve(example_input), 114);
    assert_eq!(bonus(example_input), 2);

    assert_eq!(extrapolate(&[-1, 0, 1]), 2);
    assert_eq!(extrapolate(&[5, 5, 5]), 5);
}
