use common::time;
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

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// First and last digit as a two-digit number. A lone digit counts twice.
fn calibration(mut digits: impl Iterator<Item = u32>) -> u32 {
    let first = digits.next().expect("line contains a digit");
    let last = digits.last().unwrap_or(first);
    first * 10 + last
}

fn solve(input: &str) -> u32 {
    input
        .lines()
        .map(|line| calibration(line.chars().filter_map(|c| c.to_digit(10))))
        .sum()
}

fn digit_at(rest: &str) -> Option<u32> {
    let c = rest.chars().next()?;

    c.to_digit(10).or_else(|| {
        WORDS
            .iter()
            .position(|word| rest.starts_with(word))
            .map(|i| i as u32 + 1)
    })
}

// words may overlap ("eightwo"), so every offset is tried
fn bonus(input: &str) -> u32 {
    input
        .lines()
        .map(|line| {
            let value = calibration(
                line.char_indices()
                    .filter_map(|(i, _)| digit_at(&line[i..])),
            );
            debug!("{line} -> {value}");
            value
        })
        .sum()
}

#[test]
fn test() {
    assert_eq!(
        solve(
            "
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
    "
            .trim()
        ),
        142
    );

    assert_eq!(
        bonus(
            "
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
    "
            .trim()
        ),
        281
    );

    assert_eq!(bonus("eightwo"), 82);
    assert_eq!(bonus("x7y"), 77);
}
