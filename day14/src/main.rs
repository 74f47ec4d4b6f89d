use common::{time, Dir, Grid, Pos};
use fxhash::FxHashMap;
use tracing::debug;

use Dir::*;

fn main() -> anyhow::Result<()> {
    let input = common::input(env!("CARGO_MANIFEST_DIR"))?;

    time(|| {
        // <1ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Rolls every round rock as far as it goes towards `dir`.
fn tilt(grid: &mut Grid<char>, dir: Dir) {
    let (w, h) = (grid.width() as i64, grid.height() as i64);

    // one lane per column or row, each walked away from the wall it tilts to
    let lanes: Vec<Pos> = match dir {
        Up => (0..w).map(|x| (x, 0)).collect(),
        Down => (0..w).map(|x| (x, h - 1)).collect(),
        Left => (0..h).map(|y| (0, y)).collect(),
        Right => (0..h).map(|y| (w - 1, y)).collect(),
    };

    let back = dir.opposite();

    for start in lanes {
        let mut free = start;
        let mut at = start;

        while grid.in_bounds(at) {
            match grid[at] {
                '#' => free = back.step(at),
                'O' => {
                    grid[at] = '.';
                    grid[free] = 'O';
                    free = back.step(free);
                }
                _ => {}
            }
            at = back.step(at);
        }
    }
}

fn spin(grid: &mut Grid<char>) {
    for dir in [Up, Left, Down, Right] {
        tilt(grid, dir);
    }
}

fn load(grid: &Grid<char>) -> usize {
    let h = grid.height();

    grid.rows()
        .enumerate()
        .map(|(y, row)| (h - y) * row.iter().filter(|&&c| c == 'O').count())
        .sum()
}

fn solve(input: &str) -> usize {
    let mut grid = Grid::parse(input, |c| c);
    tilt(&mut grid, Up);
    load(&grid)
}

fn bonus(input: &str) -> usize {
    let mut grid = Grid::parse(input, |c| c);
    let total = 1_000_000_000;

    let mut seen = FxHashMap::default();

    for i in 0..total {
        if let Some(&j) = seen.get(&grid) {
            let period = i - j;
            debug!("state after {i} spins repeats the one after {j}");

            for _ in 0..(total - i) % period {
                spin(&mut grid);
            }
            break;
        }

        seen.insert(grid.clone(), i);
        spin(&mut grid);
    }

    load(&grid)
}

#[test]
fn test() {
    let example_input = "
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
    ";

    assert_eq!(solve(example_input.trim()), 136);
    assert_eq!(bonus(example_input.trim()), 64);
}

#[test]
fn tilts_each_way() {
    let mut grid = Grid::parse("O.\n.#\nOO", |c| c);

    tilt(&mut grid, Up);
    assert_eq!(grid.to_string(), "O.\nO#\n.O");

    tilt(&mut grid, Right);
    assert_eq!(grid.to_string(), ".O\nO#\n.O");

    tilt(&mut grid, Down);
    assert_eq!(grid.to_string(), ".O\n.#\nOO");

    tilt(&mut grid, Left);
    assert_eq!(grid.to_string(), "O.\n.#\nOO");
}
