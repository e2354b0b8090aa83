/// One application of the splitmix64 mixing function.
///
/// Source: <https://prng.di.unimi.it/splitmix64.c>
///
/// Small or low-entropy seeds (a timestamp, a counter) must not produce
/// correlated state words, so every generator in this crate fills its state
/// by iterating this function, feeding each output back in as the next input.
/// Not cryptographically secure.
///
/// # Example
/// ```
/// # use tumble::splitmix64;
/// assert_eq!(splitmix64(0), 0xE220A8397B1DCDAF);
/// ```
pub const fn splitmix64(x: u64) -> u64 {
    let z = x.wrapping_add(0x9E3779B97F4A7C15);
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
