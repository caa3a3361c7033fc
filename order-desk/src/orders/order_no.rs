//! Order number generation
//!
//! Format: one uppercase letter followed by six digits, e.g. `K004217`.
//! Uniqueness against existing orders is not checked here.

use rand::Rng;

/// Generate an order number from the thread-local RNG
pub fn generate_order_no() -> String {
    generate_order_no_with(&mut rand::thread_rng())
}

/// Generate an order number from the given RNG
pub fn generate_order_no_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letter = char::from(rng.gen_range(b'A'..=b'Z'));
    let number: u32 = rng.gen_range(0..=999_999);
    format!("{}{:06}", letter, number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_well_formed(no: &str) -> bool {
        let bytes = no.as_bytes();
        bytes.len() == 7 && bytes[0].is_ascii_uppercase() && bytes[1..].iter().all(u8::is_ascii_digit)
    }

    #[test]
    fn test_format_thread_rng() {
        for _ in 0..1000 {
            let no = generate_order_no();
            assert!(is_well_formed(&no), "malformed order no: {}", no);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_order_no_with(&mut StdRng::seed_from_u64(42));
        let b = generate_order_no_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(is_well_formed(&a));
    }

    #[test]
    fn test_small_numbers_are_zero_padded() {
        let mut rng = StdRng::seed_from_u64(7);
        let padded = (0..5000)
            .map(|_| generate_order_no_with(&mut rng))
            .all(|no| no.len() == 7);
        assert!(padded);
    }

    #[test]
    fn test_letters_spread_over_alphabet() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 26];
        for _ in 0..2000 {
            let no = generate_order_no_with(&mut rng);
            seen[(no.as_bytes()[0] - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
