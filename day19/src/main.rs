use common::{numbers, time};
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

/// Ratings in `x`, `m`, `a`, `s` order.
type Part = [u64; 4];

/// Inclusive rating bounds per category.
type Ranges = [(u64, u64); 4];

#[derive(Debug, Clone, Copy)]
enum Op {
    Lt,
    Gt,
}

#[derive(Debug, Clone, Copy)]
struct Cond {
    category: usize,
    op: Op,
    value: u64,
}

impl Cond {
    fn holds(&self, part: &Part) -> bool {
        let rating = part[self.category];
        match self.op {
            Op::Lt => rating < self.value,
            Op::Gt => rating > self.value,
        }
    }

    /// Splits `ranges` into the part that satisfies the condition and the rest.
    fn split(&self, ranges: Ranges) -> (Option<Ranges>, Option<Ranges>) {
        let (lo, hi) = ranges[self.category];
        let v = self.value;

        let (hit, miss) = match self.op {
            Op::Lt => ((lo, hi.min(v.saturating_sub(1))), (lo.max(v), hi)),
            Op::Gt => ((lo.max(v + 1), hi), (lo, hi.min(v))),
        };

        let with = |(lo, hi): (u64, u64)| {
            (lo <= hi).then(|| {
                let mut r = ranges;
                r[self.category] = (lo, hi);
                r
            })
        };

        (with(hit), with(miss))
    }
}

#[derive(Debug, Clone)]
struct Rule<'a> {
    cond: Option<Cond>,
    target: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn parse(input: &str) -> (Workflows, Vec<Part>) {
    let workflow_re = Regex::new(r"^(\w+)\{(.*)\}$").unwrap();
    let rule_re = Regex::new(r"^([xmas])([<>])(\d+):(\w+)$").unwrap();

    let (workflows, parts) = input.trim().split_once("\n\n").expect("blank line");

    let workflows = workflows
        .lines()
        .map(|line| {
            let c = workflow_re.captures(line).expect("workflow line");
            let name = c.get(1).unwrap().as_str();
            let rules = c
                .get(2)
                .unwrap()
                .as_str()
                .split(',')
                .map(|rule| match rule_re.captures(rule) {
                    Some(c) => Rule {
                        cond: Some(Cond {
                            category: "xmas".find(&c[1]).unwrap(),
                            op: if &c[2] == "<" { Op::Lt } else { Op::Gt },
                            value: c[3].parse().unwrap(),
                        }),
                        target: c.get(4).unwrap().as_str(),
                    },
                    None => Rule {
                        cond: None,
                        target: rule,
                    },
                })
                .collect();
            (name, rules)
        })
        .collect();

    let parts = parts
        .lines()
        .map(|line| {
            numbers::<u64>(line)
                .try_into()
                .unwrap_or_else(|_| panic!("part needs four ratings: {line}"))
        })
        .collect();

    (workflows, parts)
}

fn accepts(workflows: &Workflows, part: &Part) -> bool {
    let mut at = "in";

    while at != "A" && at != "R" {
        at = workflows[at]
            .iter()
            .find(|rule| rule.cond.map_or(true, |cond| cond.holds(part)))
            .expect("matching rule")
            .target;
    }

    at == "A"
}

fn solve(input: &str) -> u64 {
    let (workflows, parts) = parse(input);

    parts
        .iter()
        .filter(|part| accepts(&workflows, part))
        .map(|part| part.iter().sum::<u64>())
        .sum()
}

/// Number of rating combinations within `ranges` that `name` ends up accepting.
fn combinations(workflows: &Workflows, name: &str, ranges: Ranges) -> u64 {
    match name {
        "A" => ranges.iter().map(|(lo, hi)| hi - lo + 1).product(),
        "R" => 0,
        _ => {
            let mut total = 0;
            let mut rest = Some(ranges);

            for rule in &workflows[name] {
                let Some(r) = rest else {
                    break;
                };

                match rule.cond {
                    Some(cond) => {
                        let (hit, miss) = cond.split(r);
                        if let Some(hit) = hit {
                            total += combinations(workflows, rule.target, hit);
                        }
                        rest = miss;
                    }
                    None => {
                        total += combinations(workflows, rule.target, r);
                        rest = None;
                    }
                }
            }

            total
        }
    }
}

// the conditions carve [1, 4000]^4 into disjoint boxes, so no overlap to remove
fn bonus(input: &str) -> u64 {
    let (workflows, _) = parse(input);
    debug!("{} workflows", workflows.len());

    combinations(&workflows, "in", [(1, 4000); 4])
}

#[test]
fn test() {
    let example_input = "px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}";

    assert_eq!(solve(example_input), 19114);
    assert_eq!(bonus(example_input), 167409079868000);
}

#[test]
fn splits_ranges() {
    let cond = Cond {
        category: 1,
        op: Op::Lt,
        value: 10,
    };
    let (hit, miss) = cond.split([(1, 4000); 4]);
    assert_eq!(hit.unwrap()[1], (1, 9));
    assert_eq!(miss.unwrap()[1], (10, 4000));

    let (hit, miss) = cond.split([(1, 4000), (10, 20), (1, 4000), (1, 4000)]);
    assert!(hit.is_none());
    assert_eq!(miss.unwrap()[1], (10, 20));
}
