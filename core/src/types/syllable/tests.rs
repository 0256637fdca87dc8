use super::*;

#[test]
fn syllable_normal_usage() {
    let syllable = Syllable::try_from("zhang").unwrap();
    assert_eq!(syllable.as_str(), "zhang");
    assert_eq!(syllable.initial(), 'z');
}

#[test]
fn syllable_is_trimmed_and_lowercased() {
    let syllable = Syllable::try_from("  ShI ").unwrap();
    assert_eq!(syllable.as_str(), "shi");
}

#[test]
fn syllable_rejects_empty_string() {
    Syllable::try_from("").unwrap_err();
    Syllable::try_from("   ").unwrap_err();
}

#[test]
fn syllable_rejects_non_letters() {
    Syllable::try_from("shi4").unwrap_err();
    Syllable::try_from("zhōng").unwrap_err();
    Syllable::try_from("xi an").unwrap_err();
}

#[test]
fn syllable_ordering() {
    const SYLLABLES: [&str; 4] = ["a", "ba", "an", "zhuang"];

    for l in SYLLABLES.iter() {
        for r in SYLLABLES.iter() {
            let syllable_l = Syllable::try_from(*l).unwrap();
            let syllable_r = Syllable::try_from(*r).unwrap();
            assert_eq!(
                syllable_l.cmp(&syllable_r),
                l.cmp(r),
                "Comparing '{}' and '{}'",
                l,
                r
            );
        }
    }
}
