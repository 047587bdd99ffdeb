//! Tests for the free-text feature extractor

use core_kernel::IncidentType;
use domain_decision::TextFeatureExtractor;

fn extractor() -> TextFeatureExtractor {
    TextFeatureExtractor::new()
}

#[test]
fn test_empty_input_yields_empty_partial() {
    assert!(extractor().extract("").is_empty());
    assert!(extractor().extract("   \t\n  ").is_empty());
}

#[test]
fn test_unparsable_text_yields_empty_partial() {
    let partial = extractor().extract("the quick brown fox jumps over the lazy dog");
    assert!(partial.is_empty());
}

#[test]
fn test_typical_accident_description() {
    let partial =
        extractor().extract("Accident occurred last month, claimed 150000 for vehicle repair");

    assert_eq!(partial.claim_amount, Some(150_000.0));
    assert_eq!(partial.incident_type, Some(IncidentType::Accident));
    // Nothing else is stated with confidence
    assert!(partial.insurance_type.is_none());
    assert!(partial.payment_method.is_none());
    assert!(partial.customer_age.is_none());
}

#[test]
fn test_amount_with_thousands_separators() {
    let partial = extractor().extract("Requesting an amount of 2,50,000 after the burglary");
    assert_eq!(partial.claim_amount, Some(250_000.0));
    assert_eq!(partial.incident_type, Some(IncidentType::Theft));
}

#[test]
fn test_currency_prefixed_amount() {
    let partial = extractor().extract("Hospitalized for surgery, bills came to Rs. 85000");
    assert_eq!(partial.claim_amount, Some(85_000.0));
    assert_eq!(partial.incident_type, Some(IncidentType::Illness));
}

#[test]
fn test_lone_large_number_is_taken_as_amount() {
    let partial = extractor().extract("Car crash, 120000 repair bill");
    assert_eq!(partial.claim_amount, Some(120_000.0));
    assert_eq!(partial.incident_type, Some(IncidentType::Accident));
}

#[test]
fn test_lone_small_number_is_not_an_amount() {
    // A bare small number without claim context is not a confident signal
    let partial = extractor().extract("Stolen 2 weeks ago");
    assert!(partial.claim_amount.is_none());
    assert_eq!(partial.incident_type, Some(IncidentType::Theft));
}

#[test]
fn test_multiple_bare_numbers_are_ambiguous() {
    let partial = extractor().extract("Between 50000 and 80000 in damages");
    assert!(partial.claim_amount.is_none());
}

#[test]
fn test_context_beats_other_numbers() {
    let partial = extractor().extract("Policy 99812, claimed 40000 after the collision");
    assert_eq!(partial.claim_amount, Some(40_000.0));
}

#[test]
fn test_incident_keywords() {
    let cases = [
        ("died peacefully at home", IncidentType::Death),
        ("my bike was stolen from the garage", IncidentType::Theft),
        ("diagnosed with a chronic disease", IncidentType::Illness),
        ("lost savings to a fraudulent transaction", IncidentType::FinancialLoss),
        ("rear-end collision on the highway", IncidentType::Accident),
    ];

    for (text, expected) in cases {
        let partial = extractor().extract(text);
        assert_eq!(partial.incident_type, Some(expected), "text: {text}");
    }
}

#[test]
fn test_conflicting_incident_keywords_are_omitted() {
    let partial = extractor().extract("After the accident the car was stolen");
    assert!(partial.incident_type.is_none());
}

#[test]
fn test_extraction_never_panics_on_arbitrary_input() {
    let inputs = [
        "ターボ декабря 🚗💥",
        "claimed claimed claimed",
        "$",
        "Rs.",
        "999999999999999999999999999999",
        "amount of NaN",
    ];
    for text in inputs {
        let _ = extractor().extract(text);
    }
}
