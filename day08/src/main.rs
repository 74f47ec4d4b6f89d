use common::time;
use fxhash::FxHashMap;
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

struct Network<'a> {
    instructions: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Self {
        let node_re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").unwrap();

        let (instructions, nodes) = input.trim().split_once("\n\n").expect("blank line");

        let nodes = nodes
            .lines()
            .map(|line| {
                let c = node_re.captures(line).expect("node line");
                let (name, left, right) = (
                    c.get(1).unwrap().as_str(),
                    c.get(2).unwrap().as_str(),
                    c.get(3).unwrap().as_str(),
                );
                (name, (left, right))
            })
            .collect();

        Network {
            instructions: instructions.trim().as_bytes(),
            nodes,
        }
    }

    /// Steps taken from `start` until `done` holds, cycling the instructions.
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> usize {
        let mut at = start;

        for (i, dir) in self.instructions.iter().cycle().enumerate() {
            if done(at) {
                return i;
            }

            let (left, right) = self.nodes[at];
            at = match dir {
                b'L' => left,
                b'R' => right,
                _ => unreachable!(),
            };
        }

        unreachable!("instructions cycle forever")
    }
}

fn solve(input: &str) -> usize {
    Network::parse(input).steps("AAA", |at| at == "ZZZ")
}

// every ghost loops back onto its first Z-node with the same period
fn bonus(input: &str) -> usize {
    let network = Network::parse(input);

    network
        .nodes
        .keys()
        .filter(|name| name.ends_with('A'))
        .map(|&start| {
            let n = network.steps(start, |at| at.ends_with('Z'));
            debug!("{start} arrives after {n} steps");
            n
        })
        .fold(1, num::integer::lcm)
}

#[test]
fn test() {
    assert_eq!(
        solve(
            "RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)"
        ),
        2
    );

    assert_eq!(
        solve(
            "LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)"
        ),
        6
    );

    assert_eq!(
        bonus(
            "LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)"
        ),
        6
    );
}
