//! Console rendering of experiment results.

use std::fmt;

use crate::experiment::ExperimentReport;
use crate::huffman::{Code, CodeTable, Symbol, Weight};

fn format_vector<T>(name: &str, items: &[T], format_item: impl Fn(&T) -> String) -> String {
    let items: Vec<String> = items.iter().map(format_item).collect();
    format!("{} = ({})", name, items.join(", "))
}

/// `P = (0.100000, 0.200000)`
pub fn format_probabilities(name: &str, probabilities: &[Weight]) -> String {
    format_vector(name, probabilities, |p| format!("{:.6}", p))
}

/// `V = (101, 0)`
pub fn format_codes(name: &str, codes: &[Code]) -> String {
    format_vector(name, codes, Code::to_string)
}

pub fn format_cost(name: &str, cost: Weight) -> String {
    format!("{} = {:.6}", name, cost)
}

/// One `symbol - code` line per entry.
pub fn format_code_table<S: Symbol>(codes: &CodeTable<S>) -> String {
    codes
        .iter()
        .map(|(symbol, code)| format!("{:?} - {}\n", symbol, code))
        .collect()
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run {}", self.run)?;
        writeln!(f, "Exp.1:")?;
        writeln!(f, "{}", format_probabilities("P", &self.direct.probabilities))?;
        writeln!(f, "{}", format_codes("V", &self.direct.codes))?;
        writeln!(f, "{}", format_cost("C", self.direct.cost))?;
        if let Some(merged) = &self.merged {
            writeln!(f)?;
            writeln!(f, "Exp.2:")?;
            writeln!(f, "{}", format_probabilities("P", &self.direct.probabilities))?;
            writeln!(f, "{}", format_probabilities("P'", &merged.probabilities))?;
            writeln!(f, "{}", format_codes("V'", &merged.codes))?;
            writeln!(f, "{}", format_codes("V", &merged.expanded_codes))?;
            writeln!(f, "{}", format_cost("C'", merged.cost))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::{format_code_table, format_codes, format_cost, format_probabilities};
    use crate::experiment::run_experiment;
    use crate::huffman::{encode, HuffmanEncoder, Weight};

    #[test]
    fn test_format_probabilities() {
        assert_eq!(
            format_probabilities("P", &[0.1, 0.25]),
            "P = (0.100000, 0.250000)"
        );
        assert_eq!(format_probabilities("P'", &[]), "P' = ()");
    }

    #[test]
    fn test_format_codes() {
        let codes = encode(&[0.1, 0.2, 0.1, 0.6]).unwrap().codes.into_dense();
        assert_eq!(format_codes("V", &codes), "V = (101, 11, 100, 0)");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost("C'", 1.6), "C' = 1.600000");
    }

    #[test]
    fn test_format_code_table() {
        let weights: BTreeMap<char, Weight> = [('x', 0.5), ('y', 0.5)].into();
        let codes = encode(&weights).unwrap().codes;
        assert_eq!(format_code_table(&codes), "'x' - 1\n'y' - 0\n");
    }

    #[test]
    fn test_display_report() {
        let report = run_experiment(0, vec![0.5, 0.25, 0.25], &HuffmanEncoder::default()).unwrap();
        let expected = "Run 0\n\
            Exp.1:\n\
            P = (0.500000, 0.250000, 0.250000)\n\
            V = (1, 01, 00)\n\
            C = 1.500000\n\
            \n\
            Exp.2:\n\
            P = (0.500000, 0.250000, 0.250000)\n\
            P' = (0.500000, 0.500000)\n\
            V' = (1, 0)\n\
            V = (1, 0, 0)\n\
            C' = 1.000000\n";
        assert_eq!(report.to_string(), expected);
    }
}
