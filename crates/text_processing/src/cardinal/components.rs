//! Hundred and scale-tier components
//!
//! A tier either reads `count scale-word` and contributes
//! `count × multiplier`, or is skipped and contributes nothing. Chaining the
//! tiers crore → lakh → thousand → hundred gives the positional sum.

use indic_itn_config::{FusedLexicon, SymbolTable};
use indic_itn_core::Tier;

use super::atoms::{table, Atoms};
use super::{ABSENT_TIER, EMPTY_HUNDRED, IMPLIED_ONE};
use crate::grammar::{accept, concat, delete_space, insert, union, Grammar};

/// 0–99 read directly: a two-digit word, or `[ties] [digit]`
///
/// Matches the empty string with value 0.
pub fn remainder(atoms: &Atoms) -> Grammar {
    let mut alternatives = Vec::new();
    alternatives.extend(atoms.tens.clone());
    alternatives.extend(atoms.teens.clone());

    let ties = match &atoms.ties {
        Some(ties) => ties.clone().or(Grammar::Epsilon),
        None => Grammar::Epsilon,
    };
    alternatives.push(concat([
        ties,
        delete_space(),
        atoms.digit.clone().or(Grammar::Epsilon),
    ]));

    union(alternatives)
}

/// `digit hundred [and]`, with "one" implied when the digit is missing
fn hundreds_head(atoms: &Atoms) -> Grammar {
    concat([
        union([atoms.digit.clone(), insert(1).weighted(IMPLIED_ONE)]).times(100),
        delete_space(),
        atoms.scale(Tier::Hundred),
        atoms.gap(),
    ])
}

/// "nineteen hundred twenty": a 10–99 word before the hundred word, 1000–9999
pub fn prefix_tens(atoms: &Atoms) -> Option<Grammar> {
    let two_digit: Vec<Grammar> = atoms
        .teens
        .iter()
        .chain(atoms.tens.iter())
        .cloned()
        .collect();
    if two_digit.is_empty() {
        return None;
    }

    Some(concat([
        union(two_digit).times(100),
        delete_space(),
        atoms.scale(Tier::Hundred),
        atoms.gap(),
        remainder(atoms),
    ]))
}

/// 0–999 in direct or place-value form, plus the prefix-tens reading
pub fn hundred_component(atoms: &Atoms) -> Grammar {
    let place_value = concat([hundreds_head(atoms).or(Grammar::Epsilon), remainder(atoms)]);
    match prefix_tens(atoms) {
        Some(prefix) => union([place_value, prefix]),
        None => place_value,
    }
}

/// Count in front of a scale word: at least one non-zero digit
pub fn count(atoms: &Atoms) -> Grammar {
    union([hundred_component(atoms), remainder(atoms)]).non_zero()
}

/// One thousand/lakh/crore tier, or its filler when skipped
pub fn tier(atoms: &Atoms, tier: Tier, count: &Grammar) -> Grammar {
    let present = concat([
        union([
            concat([count.clone(), delete_space()]),
            insert(1).weighted(IMPLIED_ONE),
        ]),
        atoms.scale(tier),
    ])
    .times(tier.multiplier());

    union([present, Grammar::Epsilon.weighted(ABSENT_TIER)])
}

/// crore · lakh · thousand · hundred, rejecting an all-zero reading
pub fn tiered(atoms: &Atoms) -> Grammar {
    let count = count(atoms);
    let sep = atoms.separator();

    concat([
        tier(atoms, Tier::Crore, &count),
        sep.clone(),
        tier(atoms, Tier::Lakh, &count),
        sep.clone(),
        tier(atoms, Tier::Thousand, &count),
        sep,
        union([
            hundred_component(atoms),
            Grammar::Epsilon.weighted(EMPTY_HUNDRED),
        ]),
    ])
    .non_zero()
}

/// Tiered grammar for scripts that fuse count and scale into one word
///
/// Thousands are a stem plus suffix ("இரண்டா" + "யிரத்து"); hundreds are a
/// stem plus suffix, a fused word followed by the units, or a round hundred
/// ("ஐநூறு") closing the phrase. Lakh and crore keep a separate count, which
/// may be any native two-digit word.
pub fn fused_tiered(fused: &FusedLexicon) -> Grammar {
    let mut hundred_forms = vec![concat([
        table(&fused.hundred_stems),
        accept(fused.hundred_suffixes.iter().cloned()),
    ])];
    hundred_forms.extend(fused.hundred_words.as_ref().map(table));

    let mut hundred = vec![concat([
        concat([union(hundred_forms).times(100), delete_space()]).or(Grammar::Epsilon),
        union([table(&fused.tens), table(&fused.digit), Grammar::Epsilon]),
    ])];
    hundred.extend(fused.round_hundreds.as_ref().map(table));

    let thousand = concat([
        table(&fused.thousand_stems),
        accept(fused.thousand_suffixes.iter().cloned()),
    ])
    .times(Tier::Thousand.multiplier());

    let spaced = |counts: &SymbolTable, words: &[String], tier: Tier| {
        concat([
            union([table(counts), table(&fused.tens)]),
            delete_space(),
            accept(words.iter().cloned()),
        ])
        .times(tier.multiplier())
    };
    let lakh = spaced(&fused.lakh_counts, &fused.lakh_words, Tier::Lakh);
    let crore = spaced(&fused.crore_counts, &fused.crore_words, Tier::Crore);

    let skippable = |g: Grammar| union([g, Grammar::Epsilon.weighted(ABSENT_TIER)]);

    concat([
        skippable(crore),
        delete_space(),
        skippable(lakh),
        delete_space(),
        skippable(thousand),
        delete_space(),
        union(hundred).or(Grammar::Epsilon.weighted(EMPTY_HUNDRED)),
    ])
    .non_zero()
}
