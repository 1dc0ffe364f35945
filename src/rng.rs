use getrandom::getrandom;
use oorandom::Rand64;

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Draws a seed from the operating system.
/// Falls back to a zero seed if no entropy source is available.
pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    let _res = getrandom(&mut buf);
    u128::from_le_bytes(buf)
}

/// Draws a full 128 bit seed from another generator, e.g. to hand out one seed per ant.
pub fn derive_seed(rng: &mut Rand64) -> u128 {
    rng.rand_u64() as u128 + ((rng.rand_u64() as u128) << 64)
}
