use super::common::*;
use crate::assessment::advice::AdviceBook;
use crate::assessment::domain::{Dosha, ResolvedCategory};

#[test]
fn pair_lookup_is_order_insensitive() {
    let book = AdviceBook::standard();

    for (first, second) in [
        (Dosha::Vata, Dosha::Pitta),
        (Dosha::Pitta, Dosha::Kapha),
        (Dosha::Vata, Dosha::Kapha),
    ] {
        let forward = book.lookup(ResolvedCategory::Dual {
            primary: first,
            secondary: second,
        });
        let backward = book.lookup(ResolvedCategory::Dual {
            primary: second,
            secondary: first,
        });
        assert_eq!(forward, backward);
        assert_ne!(forward, book.lookup(ResolvedCategory::Unknown));
    }

    assert_eq!(
        book.lookup_label("Vata-Pitta"),
        book.lookup_label("Pitta-Vata")
    );
}

#[test]
fn base_categories_have_distinct_records() {
    let book = AdviceBook::standard();

    let vata = book.lookup(ResolvedCategory::Single(Dosha::Vata));
    let pitta = book.lookup(ResolvedCategory::Single(Dosha::Pitta));
    let kapha = book.lookup(ResolvedCategory::Single(Dosha::Kapha));

    assert!(vata.diet.starts_with("Warm, oily, heavy foods"));
    assert!(pitta.lifestyle.contains("Stay cool"));
    assert!(kapha.avoid.contains("Excessive sleep"));
    assert_ne!(vata, pitta);
    assert_ne!(pitta, kapha);
}

#[test]
fn sentinels_have_their_own_records() {
    let book = AdviceBook::standard();

    let none = book.lookup(ResolvedCategory::Unscored);
    assert_eq!(none.diet, "Balanced.");
    assert_eq!(none.avoid, "Junk.");

    let unknown = book.lookup(ResolvedCategory::Unknown);
    assert_eq!(unknown.lifestyle, "Maintain balance.");
    assert_eq!(book.lookup_label("None"), none);
}

#[test]
fn unrecognized_labels_fall_back_to_unknown() {
    let book = AdviceBook::standard();
    let unknown = book.lookup(ResolvedCategory::Unknown);

    assert_eq!(book.lookup_label("Ether"), unknown);
    assert_eq!(book.lookup_label("Vata-Vata"), unknown);
    assert_eq!(book.lookup_label(""), unknown);
}

#[test]
fn engine_reports_carry_matching_advice() {
    let engine = engine();

    let report = engine.assess_answers(&all_vata_answers());

    assert_eq!(report.imbalance, ResolvedCategory::Single(Dosha::Vata));
    assert_eq!(
        &report.advice,
        engine.advice_for(ResolvedCategory::Single(Dosha::Vata))
    );
    assert!(!report.is_dual());
    assert_eq!(report.shares[0].percent, 100);
    assert!(report.symptoms.is_none());
}
