use std::ops::Range;

use common::{numbers, parse_data_on_empty_rows, time};
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
struct Rule {
    dest: u64,
    source: u64,
    len: u64,
}

impl Rule {
    fn source_range(&self) -> Range<u64> {
        self.source..self.source + self.len
    }

    fn shift(&self, n: u64) -> u64 {
        n - self.source + self.dest
    }
}

struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<Vec<Rule>>,
}

fn parse(input: &str) -> Almanac {
    let blocks = parse_data_on_empty_rows(input);
    let (seeds, maps) = blocks.split_first().expect("seeds line");

    let maps = maps
        .iter()
        .map(|block| {
            block
                .iter()
                .skip(1)
                .map(|line| match numbers::<u64>(line).as_slice() {
                    &[dest, source, len] => Rule { dest, source, len },
                    _ => panic!("bad map line: {line}"),
                })
                .collect()
        })
        .collect();

    Almanac {
        seeds: numbers(seeds[0]),
        maps,
    }
}

fn map_value(rules: &[Rule], n: u64) -> u64 {
    rules
        .iter()
        .find(|rule| rule.source_range().contains(&n))
        .map_or(n, |rule| rule.shift(n))
}

/// Maps whole ranges, splitting them wherever a rule starts or ends.
fn map_ranges(rules: &[Rule], ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
    let mut todo = ranges;
    let mut mapped = vec![];

    'next: while let Some(r) = todo.pop() {
        for rule in rules {
            let src = rule.source_range();
            let start = r.start.max(src.start);
            let end = r.end.min(src.end);

            if start < end {
                mapped.push(rule.shift(start)..rule.shift(end));
                if r.start < start {
                    todo.push(r.start..start);
                }
                if end < r.end {
                    todo.push(end..r.end);
                }
                continue 'next;
            }
        }

        // unmapped numbers keep their value
        mapped.push(r);
    }

    mapped
}

fn solve(input: &str) -> u64 {
    let almanac = parse(input);

    almanac
        .seeds
        .iter()
        .map(|&seed| {
            almanac
                .maps
                .iter()
                .fold(seed, |n, rules| map_value(rules, n))
        })
        .min()
        .expect("at least one seed")
}

fn bonus(input: &str) -> u64 {
    let almanac = parse(input);

    let seeds = almanac
        .seeds
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[0] + pair[1])
        .filter(|r| !r.is_empty())
        .collect::<Vec<_>>();

    let locations = almanac.maps.iter().fold(seeds, |ranges, rules| {
        let ranges = map_ranges(rules, ranges);
        debug!("{} ranges after map", ranges.len());
        ranges
    });

    locations
        .into_iter()
        .map(|r| r.start)
        .min()
        .expect("at least one seed range")
}

#[test]
fn test() {
    let example_input = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    assert_eq!(solve(example_input), 35);
    assert_eq!(bonus(example_input), 46);
}

#[test]
fn splits_ranges_at_rule_edges() {
    let rules = [Rule {
        dest: 100,
        source: 10,
        len: 5,
    }];

    let mut mapped = map_ranges(&rules, vec![5..20]);
    mapped.sort_by_key(|r| r.start);
    assert_eq!(mapped, vec![5..10, 15..20, 100..105]);
    assert_eq!(map_value(&rules, 14), 104);
    assert_eq!(map_value(&rules, 15), 15);
}
