//! A small English lexicon for unit tests

use indic_itn_config::{LanguageLexicon, ScaleLexicon, SymbolTable, TableKind};
use indic_itn_core::{Language, Tier};
use std::collections::BTreeMap;

const DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TIES: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

pub(crate) fn english() -> LanguageLexicon {
    let mut scales = BTreeMap::new();
    scales.insert(Tier::Hundred, words(&["hundred"]));
    scales.insert(Tier::Thousand, words(&["thousand"]));
    scales.insert(Tier::Lakh, words(&["lakh"]));
    scales.insert(Tier::Crore, words(&["crore"]));

    LanguageLexicon {
        // any variant works; the tables are what matter
        language: Language::Hindi,
        zero: SymbolTable::from_entries("zero", TableKind::Zero, [("zero", 0)]).unwrap(),
        digit: SymbolTable::from_entries("digit", TableKind::Digit, DIGITS.iter().zip(1..))
            .unwrap(),
        tens: None,
        ties: Some(
            SymbolTable::from_entries("ties", TableKind::Ties, TIES.iter().zip((20..).step_by(10)))
                .unwrap(),
        ),
        teens: Some(
            SymbolTable::from_entries("teens", TableKind::Teens, TEENS.iter().zip(10..)).unwrap(),
        ),
        multiples: Some(
            SymbolTable::from_entries("multiples", TableKind::Whole, [("dozen", 12)]).unwrap(),
        ),
        exceptions: Some(
            SymbolTable::from_entries("exceptions", TableKind::Whole, [("grand", 1000)]).unwrap(),
        ),
        scales: ScaleLexicon::new(scales).unwrap(),
        connectors: words(&["and"]),
        sign_words: words(&["minus"]),
        fused: None,
    }
}
