use std::time::Instant;

mod grid;
mod input;

pub use grid::{char_map, Dir, Grid, Pos};
pub use input::{
    init_logging, input, load_input, numbers, parse_data_on_empty_rows, read_input, Args,
};

pub fn time<F>(f: F)
where
    F: FnOnce(),
{
    let t0 = Instant::now();
    f();
    println!("  took {:?}", t0.elapsed());
}

/// Swaps rows and columns. Rows are assumed to be of equal length.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let w = rows.first().map_or(0, Vec::len);

    (0..w)
        .map(|x| rows.iter().map(|row| row[x].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transposes() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(&rows), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(transpose(&transpose(&rows)), rows);
        assert!(transpose::<u8>(&[]).is_empty());
    }
}
