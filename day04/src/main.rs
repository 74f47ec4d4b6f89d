use common::{numbers, time};
use regex::Regex;
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

/// Number of winning numbers on each card, in card order.
fn matches(input: &str) -> Vec<usize> {
    let card_re = Regex::new(r"^Card\s+(\d+):([\d\s]*)\|([\d\s]*)$").unwrap();

    input
        .lines()
        .map(|line| {
            let c = card_re.captures(line).expect("card line");
            let winning = numbers::<u32>(&c[2]);
            let have = numbers::<u32>(&c[3]);
            let n = have.iter().filter(|n| winning.contains(n)).count();
            debug!("card {}: {n} matches", &c[1]);
            n
        })
        .collect()
}

fn solve(input: &str) -> usize {
    matches(input)
        .into_iter()
        .map(|n| if n == 0 { 0 } else { 1 << (n - 1) })
        .sum()
}

fn bonus(input: &str) -> usize {
    let matches = matches(input);
    let mut copies = vec![1; matches.len()];

    for (i, &n) in matches.iter().enumerate() {
        for j in (i + 1)..(i + 1 + n).min(matches.len()) {
            copies[j] += copies[i];
        }
    }

    copies.into_iter().sum()
}

#[test]
fn test() {
    let example_input = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    assert_eq!(solve(example_input), 13);
    assert_eq!(bonus(example_input), 30);
}
