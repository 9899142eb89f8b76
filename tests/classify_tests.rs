use secret_digits::{
    classify, classify_positions, Classification, ClassifyError, Secret, Symbol,
};

fn secret(s: &str) -> Secret {
    Secret::parse(s).unwrap()
}

fn render(secret_text: &str, guess: &[u8]) -> String {
    classify(&secret(secret_text), guess).unwrap().to_string()
}

#[test]
fn test_full_match() {
    let result = classify(&secret("9689"), &[9, 6, 8, 9]).unwrap();
    assert!(result.is_win());
    assert_eq!(result, Classification::FullMatch);
    assert_eq!(result.to_string(), "Bien");
}

#[test]
fn test_full_match_for_every_secret() {
    for text in ["0", "7", "00", "112", "9689", "1234567890"] {
        let s = secret(text);
        assert_eq!(classify(&s, s.digits()).unwrap(), Classification::FullMatch);
    }
}

#[test]
fn test_neighbor_only() {
    assert_eq!(render("9689", &[4, 4, 4, 4]), "V");
}

#[test]
fn test_exact_and_present() {
    assert_eq!(render("123", &[3, 2, 1]), "RBR");
}

#[test]
fn test_exact_duplicates() {
    assert_eq!(render("112", &[1, 1, 9]), "DD");
}

#[test]
fn test_miss() {
    let result = classify(&secret("123"), &[9, 9, 9]).unwrap();
    assert_eq!(result, Classification::Miss);
    assert_eq!(result.to_string(), "Mal");
}

#[test]
fn test_present_duplicate() {
    // 1 occurs twice in the secret; at position 2 it is only present.
    assert_eq!(render("112", &[1, 2, 1]), "DRF");
}

#[test]
fn test_complement() {
    // 1 + 8 = 9 at position 0; 2 and 3 match nothing else.
    let symbols = classify_positions(&secret("123"), &[8, 0, 0]).unwrap();
    assert_eq!(symbols[0], Symbol::Complement);
    assert_eq!(render("123", &[8, 7, 6]), "PPP");
}

#[test]
fn test_neighbor_uses_both_sides() {
    // Position 1: |5 - 2| = 3, matched by the guessed 3 on the right.
    let symbols = classify_positions(&secret("050"), &[6, 2, 3]).unwrap();
    assert_eq!(symbols[1], Symbol::Neighbor);
    // Position 1: |5 - 2| = 3, matched by the guessed 3 on the left.
    let symbols = classify_positions(&secret("050"), &[3, 2, 6]).unwrap();
    assert_eq!(symbols[1], Symbol::Neighbor);
}

#[test]
fn test_neighbor_clipped_at_edges() {
    // Position 0 sees only position 1; its own guessed 2 does not count.
    let symbols = classify_positions(&secret("05"), &[2, 3]).unwrap();
    assert_eq!(symbols, vec![Symbol::None, Symbol::Neighbor]);
}

#[test]
fn test_results_bounded_by_length() {
    for text in ["123", "112", "909", "000"] {
        let s = secret(text);
        for n in 0..1000u32 {
            let guess = [(n / 100) as u8, (n / 10 % 10) as u8, (n % 10) as u8];
            let first = classify(&s, &guess).unwrap();
            let second = classify(&s, &guess).unwrap();
            assert_eq!(first, second);
            match first {
                Classification::FullMatch => assert_eq!(s.digits(), &guess),
                Classification::Miss => {}
                Classification::Symbols(symbols) => {
                    assert!(!symbols.is_empty());
                    assert!(symbols.len() <= 3);
                    assert!(!symbols.contains(&Symbol::None));
                }
            }
        }
    }
}

#[test]
fn test_invalid_length() {
    assert_eq!(
        classify(&secret("123"), &[1, 2]),
        Err(ClassifyError::InvalidLength { expected: 3, actual: 2 })
    );
    assert!(classify_positions(&secret("1"), &[1, 2]).is_err());
}

#[test]
fn test_invalid_digit() {
    assert_eq!(
        classify(&secret("123"), &[1, 12, 3]),
        Err(ClassifyError::InvalidDigit { position: 1, value: 12 })
    );
}

#[test]
fn test_symbol_letters() {
    let letters: String = [
        Symbol::ExactUnique,
        Symbol::ExactDuplicate,
        Symbol::PresentUnique,
        Symbol::PresentDuplicate,
        Symbol::Complement,
        Symbol::Neighbor,
    ]
    .iter()
    .filter_map(|s| s.to_char())
    .collect();
    assert_eq!(letters, "BDRFPV");
    assert_eq!(Symbol::None.to_char(), None);
}
