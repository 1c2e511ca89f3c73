//! Key expansion (FIPS-197 section 5.2) for all three key sizes.

use log::debug;

use crate::error::{KeyError, Result};
use crate::key::{KeySize, RoundKeySchedule};
use crate::word::Word;

/// Expands `key` into `Nb * (Nr + 1)` round-key words.
///
/// Fails with [`KeyError::InvalidKeyLength`] unless `key.len() == 4 * Nk`.
pub fn expand_key(key: &[u8], size: KeySize) -> Result<RoundKeySchedule> {
    if key.len() != size.key_len() {
        return Err(KeyError::InvalidKeyLength {
            expected: size.key_len(),
            actual: key.len(),
        });
    }

    let nk = size.nk();
    let total = size.schedule_len();
    let mut w = Vec::with_capacity(total);
    for chunk in key.chunks_exact(4) {
        w.push(Word::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = temp.rot_word().sub_word() ^ Word::rcon(i / nk);
        } else if nk > 6 && i % nk == 4 {
            temp = temp.sub_word();
        }
        let next = w[i - nk] ^ temp;
        w.push(next);
    }

    debug!("expanded {:?} key into {} words", size, w.len());
    Ok(RoundKeySchedule::new(size, w))
}

/// Like [`expand_key`], but takes Nk as a raw integer.
///
/// The key class is validated before the key length.
pub fn expand_key_nk(key: &[u8], nk: usize) -> Result<RoundKeySchedule> {
    let size = KeySize::from_nk(nk)?;
    expand_key(key, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPENDIX_A1_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn schedule_length_per_key_size() {
        for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            let key = vec![0u8; size.key_len()];
            let schedule = expand_key(&key, size).expect("valid key");
            assert_eq!(schedule.len(), 4 * (size.nr() + 1));
            assert_eq!(schedule.rounds(), size.nr());
        }
    }

    #[test]
    fn first_words_are_the_key() {
        let schedule = expand_key(&APPENDIX_A1_KEY, KeySize::Aes128).unwrap();
        assert_eq!(schedule.round_key(0), APPENDIX_A1_KEY);
    }

    #[test]
    fn first_derived_word_a1() {
        let schedule = expand_key(&APPENDIX_A1_KEY, KeySize::Aes128).unwrap();
        assert_eq!(u32::from(schedule.words()[4]), 0xa0fafe17);
        assert_eq!(u32::from(schedule.words()[43]), 0xb6630ca6);
    }

    #[test]
    fn rejects_mismatched_length() {
        let err = expand_key(&APPENDIX_A1_KEY, KeySize::Aes256).unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidKeyLength {
                expected: 32,
                actual: 16
            }
        );
        assert!(expand_key(&[], KeySize::Aes128).is_err());
        assert!(expand_key(&[0u8; 17], KeySize::Aes128).is_err());
    }

    #[test]
    fn raw_nk_entry_point() {
        let schedule = expand_key_nk(&APPENDIX_A1_KEY, 4).unwrap();
        assert_eq!(schedule.key_size(), KeySize::Aes128);
        assert_eq!(
            expand_key_nk(&APPENDIX_A1_KEY, 5).unwrap_err(),
            KeyError::InvalidKeyClass(5)
        );
        assert_eq!(
            expand_key_nk(&APPENDIX_A1_KEY, 6).unwrap_err(),
            KeyError::InvalidKeyLength {
                expected: 24,
                actual: 16
            }
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            KeyError::InvalidKeyClass(5).to_string(),
            "invalid key class: Nk must be 4, 6 or 8, got 5"
        );
        assert_eq!(
            KeyError::InvalidKeyLength {
                expected: 16,
                actual: 3
            }
            .to_string(),
            "invalid key length: expected 16 bytes, got 3"
        );
    }
}
