//! Category filter and ordering of the challenge list.

use contracts::domain::a003_challenge::aggregate::Challenge;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Points ascending, then solves descending, then sort weight descending (missing = 0).
pub fn compare_challenges(a: &Challenge, b: &Challenge) -> Ordering {
    a.points
        .cmp(&b.points)
        .then_with(|| b.solves.cmp(&a.solves))
        .then_with(|| b.sort_weight.unwrap_or(0).cmp(&a.sort_weight.unwrap_or(0)))
}

/// Categories seen for the first time are added unchecked.
pub fn merge_categories(categories: &mut BTreeMap<String, bool>, problems: &[Challenge]) {
    for problem in problems {
        categories.entry(problem.category.clone()).or_insert(false);
    }
}

/// With nothing checked every category is shown, otherwise only the checked ones.
pub fn problems_to_display(problems: &[Challenge], categories: &BTreeMap<String, bool>) -> Vec<Challenge> {
    let filtering = categories.values().any(|checked| *checked);
    let mut shown: Vec<Challenge> = problems
        .iter()
        .filter(|p| !filtering || categories.get(&p.category).copied() != Some(false))
        .cloned()
        .collect();
    shown.sort_by(compare_challenges);
    shown
}

/// Number of challenges per category, alphabetically.
pub fn category_counts(problems: &[Challenge]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for problem in problems {
        *counts.entry(problem.category.clone()).or_insert(0) += 1;
    }
    counts
}
