use std::collections::HashMap;

use typeahead_search::{BoostKey, EntryType, Session};

fn add(session: &mut Session, kind: EntryType, id: &str, score: f64, data: &str) {
    session.add(kind, id.to_string(), score, data.to_string());
}

fn prefixes(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn scenario_typeahead_query() {
    let mut session = Session::new();
    add(
        &mut session,
        EntryType::Question,
        "q1",
        0.3,
        "This is a question.",
    );
    assert_eq!(session.query(10, &prefixes(&["ques"])), vec!["q1"]);
}

#[test]
fn scenario_typeahead_wquery_boost() {
    let mut session = Session::new();
    add(&mut session, EntryType::Question, "q1", 0.3, "some question");
    add(&mut session, EntryType::Question, "q2", 0.6, "another question");
    add(
        &mut session,
        EntryType::User,
        "u1",
        0.5,
        "Question Questionson",
    );

    let mut boosts = HashMap::new();
    boosts.insert(BoostKey::Type(EntryType::User), 2.0);

    let results = session.wquery(2, &boosts, &prefixes(&["question"]));
    assert_eq!(results, vec!["u1", "q2"]);
}

#[test]
fn scenario_typeahead_delete_round_trip() {
    let mut session = Session::new();
    add(
        &mut session,
        EntryType::Question,
        "q1",
        0.3,
        "How do I door?",
    );
    session.delete("q1");
    assert!(session.query(10, &prefixes(&["door"])).is_empty());
}

#[test]
fn scenario_replace_on_duplicate_add() {
    let mut session = Session::new();
    add(&mut session, EntryType::Question, "q1", 0.4, "original data");
    add(&mut session, EntryType::Question, "q1", 0.9, "updated data");

    assert!(session.query(10, &prefixes(&["original"])).is_empty());
    assert_eq!(session.query(10, &prefixes(&["updated"])), vec!["q1"]);
}

#[test]
fn scenario_delete_of_unknown_id_is_a_no_op() {
    let mut session = Session::new();
    add(&mut session, EntryType::Topic, "t1", 0.4, "rust trie");
    session.delete("nonexistent");
    assert_eq!(session.query(10, &prefixes(&["rust"])), vec!["t1"]);
}
