//! Reservation code (PNR) generation.

use rand::Rng;

/// Alphabet for reservation codes: uppercase letters and digits, no
/// checksum, no exclusion of look-alike characters.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const PNR_LEN: usize = 10;

/// Draw a fresh 10-character code, each position independent and uniform
/// over the 36-symbol alphabet. Uniqueness is enforced by the storage
/// layer's unique index, not here.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..PNR_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
