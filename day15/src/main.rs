use common::time;
use regex::Regex;
use tracing::trace;

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

fn hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |cur, b| (cur + b as usize) * 17 % 256)
}

// newlines are ignored, the sequence may have been wrapped
fn steps(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(',')
        .map(|step| step.trim_matches(|c: char| c.is_whitespace()))
        .filter(|step| !step.is_empty())
}

fn solve(input: &str) -> usize {
    steps(&input.replace('\n', "")).map(hash).sum()
}

fn bonus(input: &str) -> usize {
    let step_re = Regex::new(r"^([a-zA-Z]+)([-=])(\d*)$").unwrap();
    let input = input.replace('\n', "");

    let mut boxes: Vec<Vec<(&str, usize)>> = vec![vec![]; 256];

    for step in steps(&input) {
        let c = step_re.captures(step).expect("lens step");
        let label = c.get(1).unwrap().as_str();
        let lenses = &mut boxes[hash(label)];

        match &c[2] {
            "-" => lenses.retain(|(l, _)| *l != label),
            "=" => {
                let focal = c[3].parse().expect("focal length");
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal,
                    None => lenses.push((label, focal)),
                }
            }
            _ => unreachable!(),
        }

        trace!("after {step}: box {} = {lenses:?}", hash(label));
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, (_, focal))| (b + 1) * (slot + 1) * focal)
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    assert_eq!(hash("HASH"), 52);
    assert_eq!(hash("rn=1"), 30);
    assert_eq!(solve(example_input), 1320);
    assert_eq!(bonus(example_input), 145);
    assert_eq!(solve("rn=1,cm-,\nqp=3\n"), 30 + 253 + 97);
}
