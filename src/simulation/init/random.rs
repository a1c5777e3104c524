/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1)
#[inline]
pub(super) fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

/// Non-zero seed; xorshift never leaves the all-zero state.
pub(super) fn seed_or_clock(seed: u32) -> u32 {
    let seed = if seed != 0 { seed } else { clock_seed() };
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

fn clock_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = js_sys::Date::now();
        (ms as u64 ^ (ms as u64 >> 32)) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0)
    }
}
