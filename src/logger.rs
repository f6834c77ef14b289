use crate::huffman::Weight;

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load {}: {}", CONFIG_FILE, e);
    }
}

pub fn log_probabilities(run: usize, name: &str, probabilities: &[Weight]) {
    fn get_rounded(probabilities: &[Weight]) -> Vec<String> {
        probabilities.iter().map(|p| format!("{:.4}", p)).collect()
    }
    log::debug!("run {} {} = {:?}", run, name, get_rounded(probabilities));
}
