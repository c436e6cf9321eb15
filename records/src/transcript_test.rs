use super::*;
use time::macros::datetime;

fn transcript(title: &str, created_at: OffsetDateTime) -> SampleTranscript {
    SampleTranscript {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: format!("{title} description"),
        transcript: "Agent: Hi there.\nProspect: Hello.".to_owned(),
        category: LeadType::Warm,
        tags: vec!["discovery".to_owned()],
        created_at,
    }
}

#[test]
fn order_by_creation_sorts_ascending() {
    let list = vec![
        transcript("third", datetime!(2025-03-01 00:00 UTC)),
        transcript("first", datetime!(2025-01-01 00:00 UTC)),
        transcript("second", datetime!(2025-02-01 00:00 UTC)),
    ];
    let titles: Vec<String> = order_by_creation(list).into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn order_by_creation_keeps_ties_in_input_order() {
    let ts = datetime!(2025-01-01 12:00 UTC);
    let list = vec![transcript("a", ts), transcript("b", ts), transcript("c", datetime!(2024-12-31 00:00 UTC))];
    let titles: Vec<String> = order_by_creation(list).into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["c", "a", "b"]);
}

#[test]
fn character_count_counts_chars_not_bytes() {
    let mut t = transcript("unicode", datetime!(2025-01-01 00:00 UTC));
    t.transcript = "café ☕".to_owned();
    assert_eq!(t.character_count(), 6);
}

#[test]
fn character_count_label_groups_thousands() {
    let mut t = transcript("long", datetime!(2025-01-01 00:00 UTC));
    t.transcript = "x".repeat(1_234_567);
    assert_eq!(t.character_count_label(), "1,234,567 characters");
    t.transcript = "x".repeat(999);
    assert_eq!(t.character_count_label(), "999 characters");
    t.transcript = String::new();
    assert_eq!(t.character_count_label(), "0 characters");
}

#[test]
fn group_thousands_handles_boundaries() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(100_000), "100,000");
    assert_eq!(group_thousands(12), "12");
}

#[test]
fn deserializes_null_tags_as_empty() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "Pricing pushback",
        "description": "Prospect balks at annual pricing",
        "transcript": "Agent: ...",
        "category": "Warm-Cold",
        "tags": null,
        "created_at": "2025-01-02T03:04:05Z"
    });
    let parsed: SampleTranscript = serde_json::from_value(json).unwrap();
    assert!(parsed.tags.is_empty());
    assert_eq!(parsed.category, LeadType::WarmCold);
}

#[test]
fn deserializes_missing_tags_as_empty() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "t",
        "description": "d",
        "transcript": "x",
        "category": "Cold",
        "created_at": "2025-01-02T03:04:05Z"
    });
    let parsed: SampleTranscript = serde_json::from_value(json).unwrap();
    assert!(parsed.tags.is_empty());
}

#[test]
fn rejects_unknown_category() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "t",
        "description": "d",
        "transcript": "x",
        "category": "Lukewarm",
        "tags": [],
        "created_at": "2025-01-02T03:04:05Z"
    });
    assert!(serde_json::from_value::<SampleTranscript>(json).is_err());
}

#[test]
fn preserves_tag_order() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "t",
        "description": "d",
        "transcript": "x",
        "category": "Hot",
        "tags": ["pricing", "demo", "budget"],
        "created_at": "2025-01-02T03:04:05Z"
    });
    let parsed: SampleTranscript = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.tags, ["pricing", "demo", "budget"]);
}
