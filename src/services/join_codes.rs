use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PREFIX_LEN: usize = 4;
const SUFFIX_LEN: usize = 4;

pub(crate) fn organization_code(name: &str) -> String {
    format!("{}{}", name_prefix(name), generate_suffix(SUFFIX_LEN))
}

pub(crate) fn class_code(name: &str) -> String {
    format!("{}-{}", name_prefix(name), generate_suffix(SUFFIX_LEN))
}

fn name_prefix(name: &str) -> String {
    name.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .take(PREFIX_LEN)
        .collect::<String>()
        .to_uppercase()
}

fn generate_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut output = String::with_capacity(len);
    for _ in 0..len {
        let index = rng.gen_range(0..ALPHABET.len());
        output.push(ALPHABET[index] as char);
    }
    output
}
