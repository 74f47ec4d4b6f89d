use common::{load_input, time};
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

use Kind::*;

const ORDER: &[u8] = b"23456789TJQKA";
const JOKER_ORDER: &[u8] = b"J23456789TQKA";

/// Jokers join whichever group is already largest.
fn kind(cards: &[u8], jokers: bool) -> Kind {
    let is_joker = |c: &&u8| jokers && **c == b'J';

    let mut groups = cards
        .iter()
        .filter(|c| !is_joker(c))
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect_vec();

    let num_jokers = cards.iter().filter(|c| is_joker(c)).count();
    match groups.first_mut() {
        Some(largest) => *largest += num_jokers,
        None => groups.push(num_jokers),
    }

    match groups.as_slice() {
        [5] => FiveOfAKind,
        [4, ..] => FourOfAKind,
        [3, 2] => FullHouse,
        [3, ..] => ThreeOfAKind,
        [2, 2, ..] => TwoPair,
        [2, ..] => OnePair,
        _ => HighCard,
    }
}

fn winnings(input: &str, jokers: bool) -> usize {
    let order = if jokers { JOKER_ORDER } else { ORDER };

    load_input(input)
        .into_iter()
        .map(|line| {
            let (cards, bid) = line.split_once(' ').expect("hand and bid");
            let cards = cards.as_bytes();
            let strengths = cards
                .iter()
                .map(|c| order.iter().position(|o| o == c).expect("known card"))
                .collect_vec();

            let kind = kind(cards, jokers);
            debug!("{} is {kind:?}", String::from_utf8_lossy(cards));

            ((kind, strengths), bid.parse::<usize>().expect("numeric bid"))
        })
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .enumerate()
        .map(|(rank, (_, bid))| (rank + 1) * bid)
        .sum()
}

fn solve(input: &str) -> usize {
    winnings(input, false)
}

fn bonus(input: &str) -> usize {
    winnings(input, true)
}

#[test]
fn test() {
    let example_input = "32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483";

    assert_eq!(solve(example_input), 6440);
    assert_eq!(bonus(example_input), 5905);
}

#[test]
fn hand_kinds() {
    assert_eq!(kind(b"23332", false), FullHouse);
    assert_eq!(kind(b"A23A4", false), OnePair);
    assert_eq!(kind(b"23456", false), HighCard);
    assert_eq!(kind(b"KTJJT", false), TwoPair);
    assert_eq!(kind(b"KTJJT", true), FourOfAKind);
    assert_eq!(kind(b"JJJJJ", true), FiveOfAKind);
    assert_eq!(kind(b"2JJJJ", true), FiveOfAKind);
    assert_eq!(kind(b"2345J", true), OnePair);
}
