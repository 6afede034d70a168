use anyhow::Result;

use rusty_classics::alphabet::*;
use rusty_classics::cipher::caesar::*;
use rusty_classics::cipher::playfair::*;
use rusty_classics::cipher::vigenere::*;
use rusty_classics::cipher::Cipher;
use rusty_classics::CipherError;

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn caesar_inverse_shift() -> Result<()> {
    let text = to_upper(PANGRAM);
    for shift in 0..26 {
        let shifted = caesar_shift(&text, shift)?;
        assert_eq!(caesar_shift(&shifted, 26 - shift)?, text);
    }

    Ok(())
}

#[test]
fn caesar_brute_force_contains_plaintext() -> Result<()> {
    let ciphertext = Caesar.encrypt("ET TU BRUTE", "M")?;
    let all = caesar_brute_force(&ciphertext)?;
    assert!(all.iter().any(|(shift, text)| *shift == 12 && text == "ET TU BRUTE"));

    Ok(())
}

#[test]
fn vigenere_fixture() -> Result<()> {
    let ciphertext = vigenere_encrypt("HELLO", "KEY")?;
    assert_eq!(ciphertext, "SJKWT");
    assert_eq!(vigenere_decrypt(&ciphertext, "KEY")?, "HELLO");

    Ok(())
}

#[test]
fn vigenere_round_trip() -> Result<()> {
    for key in ["A", "KEY", "LEMON", "Crypto Graphy"] {
        let ciphertext = vigenere_encrypt(PANGRAM, key)?;
        assert_eq!(vigenere_decrypt(&ciphertext, key)?, normalize(PANGRAM));
    }

    Ok(())
}

#[test]
fn vigenere_through_trait() -> Result<()> {
    let cipher: &dyn Cipher = &Vigenere;
    let ciphertext = cipher.encrypt("ATTACKATDAWN", "LEMON")?;
    assert_eq!(cipher.decrypt(&ciphertext, "LEMON")?, "ATTACKATDAWN");

    Ok(())
}

#[test]
fn key_square_covers_alphabet() -> Result<()> {
    for omitted in ALPHABET {
        let key: String = ALPHABET
            .iter()
            .rev()
            .filter(|&&c| c != omitted)
            .take(7)
            .collect();
        let square = build_key_square(&key, omitted)?;
        let mut letters: Vec<char> = square.letters().collect();
        assert_eq!(letters.len(), 25);
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 25);
        assert!(!letters.contains(&omitted));
    }

    Ok(())
}

#[test]
fn playfair_round_trip_pads() -> Result<()> {
    // the pangram has every letter, so merge J into I
    let playfair = Playfair::new('J', 'X')?.with_policy(OmittedLetterPolicy::Replace('I'))?;
    let ciphertext = playfair.encrypt_with(PANGRAM, "MONARCHY")?;
    assert_eq!(ciphertext.len() % 2, 0);

    let plaintext = playfair.decrypt_with(&ciphertext, "MONARCHY")?;
    assert_eq!(plaintext, "THEQUICKBROWNFOXIUMPSOVERTHELAZYDOGX");

    Ok(())
}

#[test]
fn playfair_even_input_is_not_padded() -> Result<()> {
    let ciphertext = playfair_encrypt("ATTACK", "KEY", 'Q')?;
    assert_eq!(ciphertext.len(), 6);
    assert_eq!(playfair_decrypt(&ciphertext, "KEY", 'Q')?, "ATTACK");

    Ok(())
}

#[test]
fn playfair_rejects_omitted_letter() {
    assert_eq!(
        playfair_encrypt(PANGRAM, "KEY", 'J'),
        Err(CipherError::CharacterNotInGrid('J'))
    );
}

#[test]
fn playfair_needs_matching_omitted_letter() -> Result<()> {
    let ciphertext = playfair_encrypt("HELLOWORLD", "KEY", 'Q')?;
    let mismatched = playfair_decrypt(&ciphertext, "KEY", 'J');
    assert_ne!(mismatched, Ok("HELLOWORLD".to_string()));

    Ok(())
}
