use std::collections::HashSet;
use std::hash::Hash;

/// Combines error results.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Returns duplicated items in order of their second appearance, each reported once.
pub fn get_duplicates<'a, T, I>(items: I) -> Option<Vec<T>>
where
    T: Clone + Eq + Hash + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    let duplicates = items
        .filter(|item| !seen.insert(*item) && reported.insert(*item))
        .cloned()
        .collect::<Vec<_>>();

    if duplicates.is_empty() { None } else { Some(duplicates) }
}
