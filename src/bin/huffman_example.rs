use std::collections::BTreeMap;

use huffman_coding::huffman::{
    weighted_path_length_of_patterns, BitAssignment, HuffmanEncoder, HuffmanTree, Result, Weight,
};
use huffman_coding::report::{format_code_table, format_codes, format_cost};

fn main() -> Result<()> {
    // symbol-weight pairs with sparse 32 bit symbols
    let weights: BTreeMap<u32, Weight> =
        [(1, 0.3), (400, 0.1), (34, 0.3), (42, 0.1), (6543, 0.2)].into();

    let tree = HuffmanTree::from_weights(&weights)?;
    println!("huffman tree\n{}", tree);

    let encoding = HuffmanEncoder::default().encode(&weights)?;
    println!("codes\n{}", format_code_table(&encoding.codes));
    println!("{}", format_cost("C", encoding.expected_length));

    let avoiding = HuffmanEncoder::new(BitAssignment::AvoidLeadingZero).encode(&weights)?;
    println!(
        "codes without leading zero\n{}",
        format_code_table(&avoiding.codes)
    );

    // the same cost, recomputed from codes packed behind a sentinel bit
    let probabilities: Vec<Weight> = weights.values().copied().collect();
    let codes: Vec<_> = encoding.codes.iter().map(|(_, code)| code.clone()).collect();
    let patterns: Vec<u64> = codes
        .iter()
        .filter_map(|code| code.to_sentinel_pattern())
        .collect();
    println!("{}", format_codes("V", &codes));
    println!("patterns {:?}", patterns);
    println!(
        "{}",
        format_cost("C", weighted_path_length_of_patterns(&probabilities, &patterns)?)
    );
    Ok(())
}
