use common::{time, Dir};
use tracing::debug;

use Dir::*;

fn main() -> anyhow::Result<()> {
    let input = common::input(env!("CARGO_MANIFEST_DIR"))?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // <100µs
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Cubic metres dug out by following the plan: the trench itself plus
/// everything it encloses.
///
/// The shoelace formula gives the area of the polygon through the centres of
/// the trench cubes; Pick's theorem then adds the outer half of the boundary.
fn lagoon(plan: impl IntoIterator<Item = (Dir, i64)>) -> i64 {
    let mut at = (0, 0);
    let mut double_area = 0;
    let mut perimeter = 0;

    for (dir, metres) in plan {
        let next = dir.step_by(at, metres);
        double_area += at.0 * next.1 - next.0 * at.1;
        perimeter += metres;
        at = next;
    }

    debug!("perimeter {perimeter}, ends at {at:?}");

    double_area.abs() / 2 + perimeter / 2 + 1
}

fn solve(input: &str) -> i64 {
    lagoon(input.lines().map(|line| {
        let mut parts = line.split_whitespace();
        let dir = match parts.next() {
            Some("U") => Up,
            Some("R") => Right,
            Some("D") => Down,
            Some("L") => Left,
            other => panic!("bad direction {other:?}"),
        };
        let metres = parts
            .next()
            .and_then(|n| n.parse::<i64>().ok())
            .expect("metres");
        (dir, metres)
    }))
}

// the colour is the real instruction: five hex digits of distance, then the direction
fn bonus(input: &str) -> i64 {
    lagoon(input.lines().map(|line| {
        let colour = line
            .split_whitespace()
            .nth(2)
            .and_then(|c| c.strip_prefix("(#"))
            .and_then(|c| c.strip_suffix(')'))
            .expect("colour code");

        let metres = i64::from_str_radix(&colour[..5], 16).expect("hex distance");
        let dir = match &colour[5..] {
            "0" => Right,
            "1" => Down,
            "2" => Left,
            "3" => Up,
            other => panic!("bad direction digit {other}"),
        };
        (dir, metres)
    }))
}

#[test]
fn test() {
    let example_input = "R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)";

    assert_eq!(solve(example_input), 62);
    assert_eq!(bonus(example_input), 952408144115);
}

#[test]
fn single_cube() {
    assert_eq!(lagoon([(Right, 1), (Down, 1), (Left, 1), (Up, 1)]), 4);
}
