use common::{char_map, time, Pos};
use fxhash::FxHashMap;
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

#[derive(Debug)]
struct Number {
    value: u32,
    y: i64,
    x0: i64,
    x1: i64,
}

impl Number {
    /// The ring of cells around the digits, diagonals included.
    fn surroundings(&self) -> impl Iterator<Item = Pos> + '_ {
        (self.y - 1..=self.y + 1)
            .flat_map(move |y| (self.x0 - 1..=self.x1 + 1).map(move |x| (x, y)))
            .filter(move |&(x, y)| y != self.y || x < self.x0 || x > self.x1)
    }
}

fn numbers(input: &str) -> Vec<Number> {
    let mut found = vec![];

    for (y, line) in input.lines().enumerate() {
        let mut run: Option<(i64, u32)> = None;

        for (x, c) in line.chars().chain(Some('.')).enumerate() {
            match (c.to_digit(10), run) {
                (Some(d), Some((x0, value))) => run = Some((x0, value * 10 + d)),
                (Some(d), None) => run = Some((x as i64, d)),
                (None, Some((x0, value))) => {
                    found.push(Number {
                        value,
                        y: y as i64,
                        x0,
                        x1: x as i64 - 1,
                    });
                    run = None;
                }
                (None, None) => {}
            }
        }
    }

    found
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

fn solve(input: &str) -> u32 {
    let map = char_map(input);

    numbers(input)
        .into_iter()
        .filter(|n| {
            n.surroundings()
                .any(|p| map.get(&p).is_some_and(|&c| is_symbol(c)))
        })
        .map(|n| n.value)
        .sum()
}

fn bonus(input: &str) -> u32 {
    let map = char_map(input);
    let mut gears: FxHashMap<Pos, Vec<u32>> = FxHashMap::default();

    for n in numbers(input) {
        for p in n.surroundings() {
            if map.get(&p) == Some(&'*') {
                gears.entry(p).or_default().push(n.value);
            }
        }
    }

    debug!("gear candidates: {gears:?}");

    gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] * parts[1])
        .sum()
}

#[test]
fn test() {
    let example_input = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    assert_eq!(solve(example_input), 4361);
    assert_eq!(bonus(example_input), 467835);
}

#[test]
fn equal_part_numbers_are_distinct() {
    assert_eq!(bonus("12.\n.*.\n12."), 144);
    assert_eq!(solve("..5\n5.."), 0);
}
