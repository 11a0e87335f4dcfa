use std::cmp::Ordering;

///
/// Explicit total order over bin identifiers.
///
/// Identifiers whose full trimmed text parses as an `i64` sort first,
/// ordered by value; everything else follows, ordered lexicographically by
/// bytes. Numeric ties (e.g. `"05"` vs `"5"`) fall back to the literal text
/// so that distinct grouping keys keep a deterministic order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinKey {
    Numeric(i64, String),
    Text(String),
}

impl BinKey {
    pub fn from_id(id: &str) -> Self {
        let trimmed = id.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => BinKey::Numeric(n, id.to_string()),
            Err(_) => BinKey::Text(id.to_string()),
        }
    }
}

impl Ord for BinKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BinKey::Numeric(a, sa), BinKey::Numeric(b, sb)) => {
                a.cmp(b).then_with(|| sa.cmp(sb))
            }
            (BinKey::Numeric(_, _), BinKey::Text(_)) => Ordering::Less,
            (BinKey::Text(_), BinKey::Numeric(_, _)) => Ordering::Greater,
            (BinKey::Text(a), BinKey::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for BinKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_numeric_before_text() {
        let mut ids = vec!["B-FAIL", "10", "2", "ALPHA", "-1"];
        ids.sort_by_key(|id| BinKey::from_id(id));
        assert_eq!(ids, vec!["-1", "2", "10", "ALPHA", "B-FAIL"]);
    }

    #[rstest]
    #[case("5", "05")]
    fn test_numeric_tie_is_deterministic(#[case] a: &str, #[case] b: &str) {
        // same value, distinct keys: literal text breaks the tie
        assert!(BinKey::from_id(b) < BinKey::from_id(a));
    }

    #[rstest]
    fn test_float_looking_id_is_text() {
        assert_eq!(
            BinKey::from_id("1.5"),
            BinKey::Text("1.5".to_string())
        );
    }
}
