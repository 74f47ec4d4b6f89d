use std::{cmp::Ordering, collections::BinaryHeap};

use common::{time, Dir, Grid, Pos};
use fxhash::FxHashSet;
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Crucible {
    heat_loss: u32,
    pos: Pos,
    dir: Dir,
    run: u8, // blocks moved in `dir` without turning
}

impl Crucible {
    fn key(&self) -> (Pos, Dir, u8) {
        (self.pos, self.dir, self.run)
    }

    fn moves(&self, grid: &Grid<u32>, min_run: u8, max_run: u8) -> Vec<Crucible> {
        let mut next = vec![];

        for dir in [self.dir, self.dir.turn_left(), self.dir.turn_right()] {
            let straight = dir == self.dir;

            if straight && self.run >= max_run {
                continue;
            }

            if !straight && self.run < min_run {
                continue;
            }

            let pos = dir.step(self.pos);
            let Some(&cost) = grid.get(pos) else {
                // stay in bounds
                continue;
            };

            next.push(Crucible {
                heat_loss: self.heat_loss + cost,
                pos,
                dir,
                run: if straight { self.run + 1 } else { 1 },
            });
        }

        next
    }
}

// min-heap on heat loss
impl Ord for Crucible {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .heat_loss
            .cmp(&self.heat_loss)
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl PartialOrd for Crucible {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra over (block, direction, run length) states.
fn least_heat_loss(grid: &Grid<u32>, min_run: u8, max_run: u8) -> Option<u32> {
    let target = (grid.width() as i64 - 1, grid.height() as i64 - 1);

    let mut seen = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    // the first block is free, and either way out is allowed
    for dir in [Right, Down] {
        heap.push(Crucible {
            heat_loss: 0,
            pos: (0, 0),
            dir,
            run: 0,
        });
    }

    while let Some(at) = heap.pop() {
        if at.pos == target && at.run >= min_run {
            debug!("reached the factory after {} states", seen.len());
            return Some(at.heat_loss);
        }

        if !seen.insert(at.key()) {
            continue;
        }

        heap.extend(at.moves(grid, min_run, max_run));
    }

    None
}

fn parse(input: &str) -> Grid<u32> {
    Grid::parse(input, |c| c.to_digit(10).expect("heat loss digit"))
}

fn solve(input: &str) -> u32 {
    least_heat_loss(&parse(input), 1, 3).expect("a route")
}

fn bonus(input: &str) -> u32 {
    least_heat_loss(&parse(input), 4, 10).expect("a route")
}

#[test]
fn test() {
    let example_input = "
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
    "
    .trim();

    assert_eq!(solve(example_input), 102);
    assert_eq!(bonus(example_input), 94);

    assert_eq!(
        bonus(
            "
111111111111
999999999991
999999999991
999999999991
999999999991
    "
            .trim()
        ),
        71
    );
}
