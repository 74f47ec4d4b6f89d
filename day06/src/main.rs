use common::{numbers, time};
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

fn distance(hold: u64, time: u64) -> u64 {
    hold * (time - hold)
}

/// Number of hold durations that beat the record.
///
/// The distance is symmetric around `time / 2` and increasing before it, so
/// it's enough to find the shortest winning hold.
fn ways(time: u64, record: u64) -> u64 {
    let (mut lo, mut hi) = (0, time / 2);
    if distance(hi, time) <= record {
        return 0;
    }

    while lo < hi {
        let mid = (lo + hi) / 2;
        if distance(mid, time) > record {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    time - 2 * lo + 1
}

fn solve(input: &str) -> u64 {
    let (times, records) = input.split_once('\n').expect("two lines");

    numbers::<u64>(times)
        .into_iter()
        .zip(numbers::<u64>(records))
        .map(|(time, record)| {
            let n = ways(time, record);
            debug!("race {time}ms / {record}mm: {n} ways");
            n
        })
        .product()
}

fn bonus(input: &str) -> u64 {
    let mut lines = input.lines().map(|line| {
        line.chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse::<u64>()
            .expect("digits on line")
    });

    let time = lines.next().expect("time line");
    let record = lines.next().expect("distance line");

    ways(time, record)
}

#[test]
fn test() {
    let example_input = "Time:      7  15   30
Distance:  9  40  200";

    assert_eq!(ways(7, 9), 4);
    assert_eq!(ways(15, 40), 8);
    assert_eq!(ways(30, 200), 9);
    assert_eq!(ways(3, 5), 0);

    assert_eq!(solve(example_input), 288);
    assert_eq!(bonus(example_input), 71503);
}
