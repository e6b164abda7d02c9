/// Restrict a unit's resolved import tokens to names of other catalog units.
///
/// `catalog_names` must be sorted ascending. The result is deduplicated,
/// never contains `self_name`, and is sorted ascending lexicographic — the
/// canonical deterministic order for rendered edges.
#[must_use]
pub fn filter_local_imports(
    tokens: &[String],
    catalog_names: &[String],
    self_name: &str,
) -> Vec<String> {
    debug_assert!(catalog_names.windows(2).all(|w| w[0] <= w[1]));

    let mut deps = Vec::new();
    for token in tokens {
        if token.as_str() == self_name {
            continue;
        }
        if catalog_names.binary_search(token).is_ok() {
            deps.push(token.clone());
        }
    }
    deps.sort();
    deps.dedup();
    deps
}
