use super::common::*;
use crate::assessment::domain::{AnswerSelection, Dosha, ResolvedCategory};
use crate::assessment::resolver::resolve;
use crate::assessment::scoring::accumulate;
use crate::assessment::training::export::{
    write_label_index, write_samples_csv, DatasetManifest,
};
use crate::assessment::training::{generate_samples, label_histogram, LabelClass, TrainingSample};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn label_enumeration_is_a_fixed_bijection() {
    for (index, class) in LabelClass::ALL.iter().enumerate() {
        assert_eq!(class.index(), index);
        assert_eq!(LabelClass::from_index(index), Some(*class));
    }
    assert_eq!(LabelClass::from_index(7), None);
}

#[test]
fn both_pair_orderings_share_a_label() {
    let forward = ResolvedCategory::Dual {
        primary: Dosha::Pitta,
        secondary: Dosha::Kapha,
    };
    let backward = ResolvedCategory::Dual {
        primary: Dosha::Kapha,
        secondary: Dosha::Pitta,
    };

    assert_eq!(LabelClass::from_category(forward), Some(LabelClass::PittaKapha));
    assert_eq!(LabelClass::from_category(backward), Some(LabelClass::PittaKapha));
    assert_eq!(LabelClass::PittaKapha.index(), 4);
}

#[test]
fn sentinels_share_the_unknown_label() {
    assert_eq!(
        LabelClass::from_category(ResolvedCategory::Unknown),
        Some(LabelClass::Unknown)
    );
    assert_eq!(
        LabelClass::from_category(ResolvedCategory::Unscored),
        Some(LabelClass::Unknown)
    );
    assert_eq!(LabelClass::Unknown.index(), 6);
}

#[test]
fn unmapped_category_defaults_to_unknown() {
    let degenerate = ResolvedCategory::Dual {
        primary: Dosha::Vata,
        secondary: Dosha::Vata,
    };

    assert_eq!(LabelClass::from_category(degenerate), None);
    assert_eq!(
        LabelClass::for_category_or_unknown(degenerate),
        LabelClass::Unknown
    );
}

#[test]
fn samples_stay_within_question_ranges() {
    let bank = bank();
    let mut rng = StdRng::seed_from_u64(11);

    let samples = generate_samples(&bank, 500, &mut rng);

    assert_eq!(samples.len(), 500);
    let limits = [5.0, 3.0, 4.0, 3.0];
    for sample in &samples {
        assert_eq!(sample.features.len(), 4);
        for (value, limit) in sample.features.iter().zip(limits) {
            assert!(*value >= 0.0 && *value <= limit);
            assert_eq!(value.fract(), 0.0);
        }
        assert!(sample.label <= 6);
    }
}

#[test]
fn labels_agree_with_rule_based_outcome() {
    let bank = bank();
    let mut rng = StdRng::seed_from_u64(3);

    for sample in generate_samples(&bank, 200, &mut rng) {
        let answers: Vec<AnswerSelection> = sample
            .features
            .iter()
            .enumerate()
            .map(|(question, value)| AnswerSelection::new(question, *value as usize))
            .collect();
        let category = resolve(&accumulate(&bank, &answers));
        assert_eq!(
            sample.label_class(),
            LabelClass::from_category(category),
            "sample {:?} resolved to {category}",
            sample.features
        );
    }
}

#[test]
fn fixed_seed_reproduces_the_batch() {
    let engine = engine();

    let first = engine.generate_samples(64, Some(2024));
    let second = engine.generate_samples(64, Some(2024));

    assert_eq!(first, second);
}

#[test]
fn generating_zero_samples_yields_empty_batch() {
    let mut rng = StdRng::seed_from_u64(1);

    assert!(generate_samples(&bank(), 0, &mut rng).is_empty());
}

#[test]
fn histogram_counts_every_sample() {
    let samples = vec![
        TrainingSample {
            features: vec![0.0, 1.0, 0.0, 0.0],
            label: 0,
        },
        TrainingSample {
            features: vec![1.0, 2.0, 1.0, 1.0],
            label: 1,
        },
        TrainingSample {
            features: vec![0.0, 2.0, 0.0, 1.0],
            label: 3,
        },
        TrainingSample {
            features: vec![0.0, 1.0, 0.0, 0.0],
            label: 0,
        },
    ];

    assert_eq!(label_histogram(&samples), [2, 1, 0, 1, 0, 0, 0]);
}

#[test]
fn histogram_ignores_labels_outside_enumeration() {
    let samples = vec![
        TrainingSample {
            features: vec![0.0, 0.0, 0.0, 0.0],
            label: 42,
        },
        TrainingSample {
            features: vec![0.0, 0.0, 0.0, 0.0],
            label: 6,
        },
    ];

    assert_eq!(label_histogram(&samples), [0, 0, 0, 0, 0, 0, 1]);

    let manifest = DatasetManifest::new(&samples, None, Utc::now());
    let counted: usize = manifest.label_counts.iter().map(|entry| entry.count).sum();
    assert_eq!(manifest.sample_count, 2);
    assert_eq!(counted, 1);
}

#[test]
fn csv_export_writes_header_and_rows() {
    let samples = vec![
        TrainingSample {
            features: vec![0.0, 1.0, 2.0, 3.0],
            label: 5,
        },
        TrainingSample {
            features: vec![5.0, 3.0, 4.0, 0.0],
            label: 6,
        },
    ];
    let mut buffer = Vec::new();

    write_samples_csv(&mut buffer, &samples).expect("csv written");

    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text, "q1,q2,q3,q4,label\n0,1,2,3,5\n5,3,4,0,6\n");
}

#[test]
fn label_index_lists_canonical_names() {
    let mut buffer = Vec::new();

    write_label_index(&mut buffer).expect("labels written");

    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "0: Vata");
    assert_eq!(lines[3], "3: Vata-Pitta");
    assert_eq!(lines[4], "4: Pitta-Kapha");
    assert_eq!(lines[5], "5: Vata-Kapha");
    assert_eq!(lines[6], "6: Unknown");
}

#[test]
fn manifest_summarizes_label_counts() {
    let engine = engine();
    let samples = engine.generate_samples(300, Some(9));
    let generated_at = Utc
        .with_ymd_and_hms(2025, 1, 15, 8, 30, 0)
        .single()
        .expect("valid timestamp");

    let manifest = DatasetManifest::new(&samples, Some(9), generated_at);

    assert_eq!(manifest.sample_count, 300);
    assert_eq!(manifest.label_counts.len(), 7);
    assert_eq!(
        manifest
            .label_counts
            .iter()
            .map(|entry| entry.count)
            .sum::<usize>(),
        300
    );

    let mut buffer = Vec::new();
    manifest.write_json(&mut buffer).expect("manifest written");
    let decoded: DatasetManifest = serde_json::from_slice(&buffer).expect("manifest decodes");
    assert_eq!(decoded, manifest);
}
