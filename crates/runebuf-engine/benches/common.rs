// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_text(lines: usize) -> Vec<char> {
    let base = "The quick brown fox jumps over the lazy dog. Ünïcödé ✓ 世界\n";
    base.repeat(lines).chars().collect()
}

/// Deterministic offsets spread over `0..=len`.
#[allow(dead_code)]
pub fn scattered_offsets(len: usize, count: usize) -> Vec<usize> {
    let mut state = 0x2545_f491_u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % (len as u64 + 1)) as usize
        })
        .collect()
}
