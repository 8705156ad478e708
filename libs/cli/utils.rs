use std::collections::BTreeMap;

/// Tally how often each value occurs.
pub fn tally(values: impl IntoIterator<Item = String>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_value() {
        let counts = tally(["a", "b", "a"].map(String::from));
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let counts = tally(std::iter::empty::<String>());
        assert!(counts.is_empty());
    }
}
