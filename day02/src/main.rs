use common::{load_input, time};
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

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    rounds: Vec<Cubes>,
}

fn parse(input: &str) -> Vec<Game> {
    let cube_re = Regex::new(r"(\d+) (red|green|blue)").unwrap();

    load_input(input)
        .into_iter()
        .map(|line| {
            let (head, rounds) = line.split_once(": ").expect("game header");
            let id = head
                .trim_start_matches("Game ")
                .parse()
                .expect("numeric game id");

            let rounds = rounds
                .split("; ")
                .map(|round| {
                    let mut cubes = Cubes::default();
                    for c in cube_re.captures_iter(round) {
                        let n = c[1].parse::<u32>().unwrap();
                        match &c[2] {
                            "red" => cubes.red += n,
                            "green" => cubes.green += n,
                            "blue" => cubes.blue += n,
                            _ => unreachable!(),
                        }
                    }
                    cubes
                })
                .collect();

            Game { id, rounds }
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    let bag = Cubes {
        red: 12,
        green: 13,
        blue: 14,
    };

    parse(input)
        .into_iter()
        .filter(|game| {
            let possible = game.rounds.iter().all(|round| round.fits_in(&bag));
            debug!("game {} possible: {possible}", game.id);
            possible
        })
        .map(|game| game.id)
        .sum()
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .map(|game| {
            game.rounds
                .into_iter()
                .fold(Cubes::default(), Cubes::max)
                .power()
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    assert_eq!(solve(example_input), 8);
    assert_eq!(bonus(example_input), 2286);
}
