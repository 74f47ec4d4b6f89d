use cached::proc_macro::cached;
use common::{numbers, time};
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

/// Ways to resolve every `?` so that the runs of `#` are exactly `groups`.
#[cached]
fn arrangements(springs: String, groups: Vec<usize>) -> usize {
    let springs = springs.trim_start_matches('.');

    let Some(first) = springs.chars().next() else {
        return groups.is_empty() as usize;
    };

    let as_operational = if first == '?' {
        arrangements(springs[1..].to_string(), groups.clone())
    } else {
        0
    };

    as_operational + place_group(springs, &groups)
}

/// Ways left after the first group starts right at the head of `springs`.
fn place_group(springs: &str, groups: &[usize]) -> usize {
    let Some((&n, rest)) = groups.split_first() else {
        return 0;
    };

    if springs.len() < n || springs[..n].contains('.') {
        return 0;
    }

    match springs.as_bytes().get(n) {
        None => rest.is_empty() as usize,
        // the group would be longer than n
        Some(b'#') => 0,
        Some(_) => arrangements(springs[n + 1..].to_string(), rest.to_vec()),
    }
}

fn rows(input: &str) -> impl Iterator<Item = (&str, Vec<usize>)> {
    input.lines().map(|line| {
        let (springs, groups) = line.split_once(' ').expect("springs and groups");
        (springs, numbers::<usize>(groups))
    })
}

fn solve(input: &str) -> usize {
    rows(input)
        .map(|(springs, groups)| arrangements(springs.to_string(), groups))
        .sum()
}

fn bonus(input: &str) -> usize {
    rows(input)
        .map(|(springs, groups)| {
            let n = arrangements([springs; 5].join("?"), groups.repeat(5));
            debug!("{springs} = {n}");
            n
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
    "
    .trim();

    assert_eq!(solve(example_input), 21);
    assert_eq!(bonus(example_input), 525152);

    assert_eq!(arrangements("?###????????".to_string(), vec![3, 2, 1]), 10);
    assert_eq!(arrangements(".??..??...?##.".to_string(), vec![1, 1, 3]), 4);
    assert_eq!(arrangements("#.#".to_string(), vec![1]), 0);
    assert_eq!(arrangements("...".to_string(), vec![]), 1);
}
