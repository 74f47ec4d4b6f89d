use std::{
    fmt,
    ops::{Index, IndexMut},
};

use fxhash::FxHashMap;

/// `(x, y)`, with `y` growing downwards.
pub type Pos = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    pub const ALL: [Dir; 4] = [Up, Right, Down, Left];

    pub fn delta(self) -> Pos {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }

    pub fn step(self, pos: Pos) -> Pos {
        self.step_by(pos, 1)
    }

    pub fn step_by(self, (x, y): Pos, n: i64) -> Pos {
        let (dx, dy) = self.delta();
        (x + dx * n, y + dy * n)
    }

    pub fn opposite(self) -> Dir {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Up => Right,
            Right => Down,
            Down => Left,
            Left => Up,
        }
    }

    pub fn turn_left(self) -> Dir {
        self.turn_right().opposite()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// Coordinate-keyed dictionary of a character grid.
pub fn char_map(input: &str) -> FxHashMap<Pos, char> {
    input
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(move |(x, c)| ((x as i64, y as i64), c))
        })
        .collect()
}

/// Dense, row-major 2-D grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    w: usize,
    h: usize,
}

impl<T> Grid<T> {
    pub fn parse(input: &str, f: impl Fn(char) -> T) -> Self {
        Self::from_rows(
            input
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().map(&f).collect())
                .collect(),
        )
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == w), "ragged grid");

        Self {
            cells: rows.into_iter().flatten().collect(),
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn in_bounds(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.1 as usize * self.w + pos.0 as usize)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.index_of(pos).map(|i| &mut self.cells[i])
    }

    pub fn set(&mut self, pos: Pos, value: T) {
        self[pos] = value;
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (w, h) = (self.w as i64, self.h as i64);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Pos> {
        self.positions().find(|&pos| pred(&self[pos]))
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.w..(y + 1) * self.w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.h).map(|y| self.row(y))
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> {
        self.cells.iter().skip(x).step_by(self.w.max(1))
    }

    /// Orthogonal neighbours that lie inside the grid.
    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = (Dir, Pos)> + '_ {
        Dir::ALL
            .into_iter()
            .map(move |dir| (dir, dir.step(pos)))
            .filter(|&(_, p)| self.in_bounds(p))
    }
}

impl<T: Clone> Grid<T> {
    pub fn transpose(&self) -> Self {
        Self::from_rows(
            (0..self.w)
                .map(|x| self.column(x).cloned().collect())
                .collect(),
        )
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        self.get(pos)
            .unwrap_or_else(|| panic!("{pos:?} outside {}x{} grid", self.w, self.h))
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let (w, h) = (self.w, self.h);
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("{pos:?} outside {w}x{h} grid"))
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Grid<char> {
        Grid::parse("ab\ncd\nef\n", |c| c)
    }

    #[test]
    fn access() {
        let mut grid = example();
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.get((1, 2)), Some(&'f'));
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.get((0, -1)), None);

        grid.set((0, 0), 'z');
        assert_eq!(grid[(0, 0)], 'z');
        assert_eq!(grid.find(|&c| c == 'd'), Some((1, 1)));
        assert_eq!(grid.column(1).collect::<String>(), "bdf");
    }

    #[test]
    fn neighbours_stay_inside() {
        let grid = example();
        let ns = grid.neighbours((0, 0)).collect::<Vec<_>>();
        assert_eq!(ns, vec![(Right, (1, 0)), (Down, (0, 1))]);
        assert_eq!(grid.neighbours((1, 1)).count(), 3);
    }

    #[test]
    fn displays_and_transposes() {
        let grid = example();
        assert_eq!(grid.to_string(), "ab\ncd\nef");
        assert_eq!(grid.transpose().to_string(), "ace\nbdf");
    }

    #[test]
    fn turns() {
        assert_eq!(Up.turn_right(), Right);
        assert_eq!(Up.turn_left(), Left);
        assert_eq!(Left.turn_left(), Down);
        assert_eq!(Down.step_by((3, 3), 2), (3, 5));
        for dir in Dir::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.turn_left().turn_right(), dir);
        }
    }

    #[test]
    fn char_map_is_keyed_by_x_then_y() {
        let map = char_map("ab\ncd");
        assert_eq!(map[&(1, 0)], 'b');
        assert_eq!(map[&(0, 1)], 'c');
        assert_eq!(map.len(), 4);
    }
}
