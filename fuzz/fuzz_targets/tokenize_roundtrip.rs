use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let tokens = textaug::tokenize(text);
                let _ = textaug::detokenize(&tokens);
            }
        });
    }
}
