//! Narrowing a result set before display or binning

use super::matchup::{TypeMatchup, type_matchup};
use super::matrix::CounterResult;
use crate::types::{Type, TypeChart};

/// Keep results whose typing shares at least one type with `types`
pub fn filter_by_types<'a, I>(results: I, types: &[Type]) -> Vec<&'a CounterResult>
where
    I: IntoIterator<Item = &'a CounterResult>,
{
    results
        .into_iter()
        .filter(|r| r.types.iter().any(|t| types.contains(t)))
        .collect()
}

/// Keep results whose typing has the given matchup against the target
pub fn filter_by_matchup<'a, I>(
    results: I,
    target_types: &[Type],
    matchup: TypeMatchup,
    chart: &TypeChart,
) -> Vec<&'a CounterResult>
where
    I: IntoIterator<Item = &'a CounterResult>,
{
    results
        .into_iter()
        .filter(|r| type_matchup(&r.types, target_types, chart) == matchup)
        .collect()
}
