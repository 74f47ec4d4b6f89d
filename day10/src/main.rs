use common::{time, Dir, Grid, Pos};
use tracing::debug;

use Dir::*;

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

fn connections(pipe: char) -> &'static [Dir] {
    match pipe {
        '|' => &[Up, Down],
        '-' => &[Left, Right],
        'L' => &[Up, Right],
        'J' => &[Up, Left],
        '7' => &[Down, Left],
        'F' => &[Down, Right],
        _ => &[],
    }
}

/// The tiles of the main loop, in walking order, starting at `S`.
fn find_loop(input: &str) -> Vec<Pos> {
    let grid = Grid::parse(input, |c| c);
    let start = grid.find(|&c| c == 'S').expect("start tile");

    // S hides its shape, so leave towards any neighbour that connects back
    let mut dir = Dir::ALL
        .into_iter()
        .find(|d| {
            grid.get(d.step(start))
                .is_some_and(|&c| connections(c).contains(&d.opposite()))
        })
        .expect("a pipe connected to S");

    let mut trail = vec![];
    let mut at = start;

    loop {
        trail.push(at);
        at = dir.step(at);
        if at == start {
            break;
        }

        dir = *connections(grid[at])
            .iter()
            .find(|&&d| d != dir.opposite())
            .expect("loop continues");
    }

    debug!("loop of {} tiles", trail.len());
    trail
}

fn solve(input: &str) -> usize {
    find_loop(input).len() / 2
}

// shoelace formula for the area, then Pick's theorem: A = i + b/2 - 1
fn bonus(input: &str) -> i64 {
    let trail = find_loop(input);
    let b = trail.len() as i64;

    let double_area = trail
        .iter()
        .zip(trail.iter().cycle().skip(1))
        .map(|(&(x0, y0), &(x1, y1))| x0 * y1 - x1 * y0)
        .sum::<i64>()
        .abs();

    (double_area - b) / 2 + 1
}

#[test]
fn test() {
    let square = "
.....
.S-7.
.|.|.
.L-J.
.....
    ";

    let complex = "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    ";

    assert_eq!(solve(square.trim()), 4);
    assert_eq!(solve(complex.trim()), 8);
    assert_eq!(bonus(square.trim()), 1);
    assert_eq!(bonus(complex.trim()), 1);

    assert_eq!(
        bonus(
            "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
    "
            .trim()
        ),
        4
    );

    assert_eq!(
        bonus(
            "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
    "
            .trim()
        ),
        8
    );

    assert_eq!(
        bonus(
            "
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
    "
            .trim()
        ),
        10
    );
}
