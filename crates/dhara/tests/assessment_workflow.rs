use dhara::assessment::{
    accumulate, resolve, score_terms, AdviceBook, AnswerSelection, AssessmentEngine, Dosha,
    QuestionBank, ResolvedCategory, ScoreMap, SymptomLexicon,
};

fn answers(options: [usize; 4]) -> Vec<AnswerSelection> {
    options
        .iter()
        .enumerate()
        .map(|(question, option)| AnswerSelection::new(question, *option))
        .collect()
}

#[test]
fn questionnaire_flows_from_answers_to_advice() {
    let bank = QuestionBank::standard();
    let advice = AdviceBook::standard();

    // Irritability, Intense, Perfectionism, Waking at 2-3 AM
    let scores = accumulate(&bank, &answers([1, 2, 1, 1]));
    assert_eq!(scores.get(Dosha::Pitta), 8);

    let imbalance = resolve(&scores);
    assert_eq!(imbalance, ResolvedCategory::Single(Dosha::Pitta));
    assert!(advice.lookup(imbalance).lifestyle.contains("avoid direct sun"));
}

#[test]
fn close_scores_produce_dual_advice() {
    let engine = AssessmentEngine::standard();

    // Sadness (Kapha 2), Unstable (Vata 2), Racing thoughts (Vata 1), Oversleeping (Kapha 2)
    let report = engine.assess_answers(&answers([2, 1, 3, 2]));

    assert_eq!(
        report.imbalance,
        ResolvedCategory::Dual {
            primary: Dosha::Kapha,
            secondary: Dosha::Vata,
        }
    );
    assert_eq!(report.imbalance.to_string(), "Kapha-Vata");
    assert!(report.is_dual());
    assert!(report.advice.diet.contains("Ginger tea"));
}

#[test]
fn every_possible_answer_set_resolves_inside_the_closed_set() {
    let bank = QuestionBank::standard();
    let counts = bank.option_counts();

    for a in 0..counts[0] {
        for b in 0..counts[1] {
            for c in 0..counts[2] {
                for d in 0..counts[3] {
                    let scores = accumulate(&bank, &answers([a, b, c, d]));
                    assert_eq!(scores.total(), scores.iter().map(|(_, s)| s).sum::<u32>());
                    let resolved = resolve(&scores);
                    assert!(!matches!(
                        resolved,
                        ResolvedCategory::Unknown | ResolvedCategory::Unscored
                    ));
                }
            }
        }
    }
}

#[test]
fn free_text_path_scores_looser_than_questionnaire() {
    let lexicon = SymptomLexicon::standard();

    let terms = lexicon
        .extract_symptoms("I have bloating and gas")
        .expect("symptoms detected");
    let scores = score_terms(&lexicon, &terms);

    assert!(scores.get(Dosha::Vata) >= 2);
    assert_eq!(resolve(&scores), ResolvedCategory::Single(Dosha::Vata));
    assert_eq!(resolve(&ScoreMap::empty()).to_string(), "None");
}
