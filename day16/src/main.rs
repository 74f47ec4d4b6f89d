use common::{time, Dir, Grid, Pos};
use fxhash::FxHashSet;
use rayon::prelude::*;
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

type Beam = (Pos, Dir);

/// Directions a beam leaves a tile in, having entered it moving `dir`.
fn bounce(tile: char, dir: Dir) -> Vec<Dir> {
    match tile {
        '.' => vec![dir],
        '/' if dir.is_vertical() => vec![dir.turn_right()],
        '/' => vec![dir.turn_left()],
        '\\' if dir.is_vertical() => vec![dir.turn_left()],
        '\\' => vec![dir.turn_right()],
        '|' if !dir.is_vertical() => vec![Up, Down],
        '-' if dir.is_vertical() => vec![Left, Right],
        '|' | '-' => vec![dir],
        _ => unreachable!("unknown tile {tile:?}"),
    }
}

fn energised(grid: &Grid<char>, start: Beam) -> usize {
    // a beam that comes by the same tile in the same direction is in a loop
    let mut seen: FxHashSet<Beam> = FxHashSet::default();
    let mut todo = vec![start];

    while let Some((pos, dir)) = todo.pop() {
        if !grid.in_bounds(pos) || !seen.insert((pos, dir)) {
            continue;
        }

        todo.extend(
            bounce(grid[pos], dir)
                .into_iter()
                .map(|next| (next.step(pos), next)),
        );
    }

    seen.into_iter()
        .map(|(pos, _)| pos)
        .collect::<FxHashSet<_>>()
        .len()
}

fn entries(grid: &Grid<char>) -> Vec<Beam> {
    let (w, h) = (grid.width() as i64, grid.height() as i64);

    (0..w)
        .flat_map(|x| [((x, 0), Down), ((x, h - 1), Up)])
        .chain((0..h).flat_map(|y| [((0, y), Right), ((w - 1, y), Left)]))
        .collect()
}

fn solve(input: &str) -> usize {
    let grid = Grid::parse(input, |c| c);
    energised(&grid, ((0, 0), Right))
}

fn bonus(input: &str) -> usize {
    let grid = Grid::parse(input, |c| c);
    let entries = entries(&grid);
    debug!("trying {} entry points", entries.len());

    entries
        .into_par_iter()
        .map(|start| energised(&grid, start))
        .max()
        .unwrap_or(0)
}

#[test]
fn test() {
    let example_input = r"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
    "
    .trim();

    assert_eq!(solve(example_input), 46);
    assert_eq!(bonus(example_input), 51);
}

#[test]
fn mirrors() {
    assert_eq!(bounce('/', Right), vec![Up]);
    assert_eq!(bounce('/', Down), vec![Left]);
    assert_eq!(bounce('\\', Right), vec![Down]);
    assert_eq!(bounce('\\', Up), vec![Left]);
    assert_eq!(bounce('|', Left), vec![Up, Down]);
    assert_eq!(bounce('-', Left), vec![Left]);
}
