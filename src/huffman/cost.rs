use super::code::sentinel_pattern_length;
use super::{CodeTable, DomainError, Error, Result, Weight, WeightSource};

/// Expected code length `Σ weight(s) · |code(s)|` of `codes` under `weights`.
///
/// Every weighted symbol needs a code; symbols only present in `codes` are
/// ignored.
pub fn weighted_path_length<W>(weights: &W, codes: &CodeTable<W::Symbol>) -> Result<Weight>
where
    W: WeightSource + ?Sized,
{
    weights
        .weighted_symbols()
        .into_iter()
        .try_fold(0.0, |total, (symbol, weight)| {
            let code = codes.get(&symbol).ok_or_else(|| {
                Error::from(DomainError::MissingCode {
                    symbol: format!("{:?}", symbol),
                })
            })?;
            Ok(total + weight * code.len() as Weight)
        })
}

/// Expected code length for codes packed as sentinel patterns (see
/// [`super::Code::to_sentinel_pattern`]), paired with `weights` by position.
///
/// Patterns past the last weight are ignored.
pub fn weighted_path_length_of_patterns(weights: &[Weight], patterns: &[u64]) -> Result<Weight> {
    weights
        .iter()
        .enumerate()
        .try_fold(0.0, |total, (index, &weight)| {
            let &pattern = patterns.get(index).ok_or_else(|| {
                Error::from(DomainError::MissingCode {
                    symbol: index.to_string(),
                })
            })?;
            let length = sentinel_pattern_length(pattern)?;
            Ok(total + weight * length as Weight)
        })
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::{weighted_path_length, weighted_path_length_of_patterns};
    use crate::huffman::{encode, DomainError, Error, Weight};

    const EPSILON: Weight = 1e-9;

    #[test]
    fn test_weighted_path_length_of_encoding() {
        let weights = [0.1, 0.2, 0.1, 0.6];
        let encoding = encode(&weights).unwrap();
        let cost = weighted_path_length(&weights, &encoding.codes).unwrap();
        assert!((cost - 1.6).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_path_length_fails_for_uncovered_symbol() {
        let encoded: BTreeMap<char, Weight> = [('a', 0.5), ('b', 0.5)].into();
        let codes = encode(&encoded).unwrap().codes;
        let weights: BTreeMap<char, Weight> = [('a', 0.5), ('b', 0.25), ('c', 0.25)].into();
        assert_eq!(
            weighted_path_length(&weights, &codes),
            Err(Error::Domain(DomainError::MissingCode {
                symbol: "'c'".to_string()
            }))
        );
    }

    #[test]
    fn test_weighted_path_length_ignores_unweighted_codes() {
        let encoded: BTreeMap<char, Weight> = [('a', 0.5), ('b', 0.25), ('c', 0.25)].into();
        let codes = encode(&encoded).unwrap().codes;
        let weights: BTreeMap<char, Weight> = [('b', 2.0)].into();
        let cost = weighted_path_length(&weights, &codes).unwrap();
        assert!((cost - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_path_length_of_patterns_matches_code_table() {
        let weights = [0.2, 0.35, 0.05, 0.4];
        let encoding = encode(&weights).unwrap();
        let patterns: Vec<u64> = encoding
            .codes
            .iter()
            .filter_map(|(_, code)| code.to_sentinel_pattern())
            .collect();
        let cost = weighted_path_length_of_patterns(&weights, &patterns).unwrap();
        assert!((cost - encoding.expected_length).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_path_length_of_patterns_ignores_surplus_patterns() {
        let cost = weighted_path_length_of_patterns(&[0.5, 0.5], &[0b11, 0b10, 0b10]).unwrap();
        assert!((cost - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_weighted_path_length_of_patterns_errors() {
        assert_eq!(
            weighted_path_length_of_patterns(&[0.5, 0.5], &[0b11]),
            Err(Error::Domain(DomainError::MissingCode {
                symbol: "1".to_string()
            }))
        );
        assert_eq!(
            weighted_path_length_of_patterns(&[0.5, 0.5], &[0b11, 0]),
            Err(Error::Domain(DomainError::InvalidSentinelPattern(0)))
        );
    }
}
