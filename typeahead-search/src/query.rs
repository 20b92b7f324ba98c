use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::entry::{BoostKey, Entry, EntryType};
use crate::token::{normalize, tokenize};
use crate::trie::Trie;

/// The live corpus: every entry added so far, plus the trie indexing their
/// tokenized data.
#[derive(Default)]
pub struct Session {
    entries: HashMap<String, Entry>,
    trie: Trie,
    next_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Indexes a new entry. Re-adding an id that already exists replaces it
    /// outright — the old entry's tokens are removed before the new ones
    /// are indexed, and the replacement gets a fresh insertion sequence.
    pub fn add(&mut self, kind: EntryType, id: String, score: f64, data: String) {
        if self.entries.contains_key(&id) {
            log::debug!("entry {id} already present, replacing");
            self.delete(&id);
        }

        self.next_seq += 1;
        for token in tokenize(&data) {
            self.trie.add(&token, &id);
        }
        log::debug!("added entry {id} (kind={kind:?}, score={score})");
        self.entries.insert(
            id.clone(),
            Entry {
                kind,
                id,
                score,
                data,
                seq: self.next_seq,
            },
        );
    }

    /// Removes an entry and every index reference to it. Deleting an id
    /// that was never added, or was already removed, is a no-op.
    pub fn delete(&mut self, id: &str) {
        let Some(entry) = self.entries.remove(id) else {
            log::debug!("delete of unknown id {id} is a no-op");
            return;
        };
        for token in tokenize(&entry.data) {
            self.trie.delete(&token, id);
            if self.trie.is_empty() {
                log::trace!("trie emptied after deleting {id}, resetting root");
                self.trie = Trie::new();
                break;
            }
        }
    }

    /// Unweighted prefix search: intersects the id sets matched by each
    /// prefix, then ranks by score and recency.
    pub fn query(&self, k: usize, prefixes: &[String]) -> Vec<String> {
        let matched = self.matching_ids(prefixes);
        self.rank(matched, &HashMap::new(), k)
    }

    /// Boosted prefix search: like `query`, but each matching entry's score
    /// is scaled by every applicable boost before ranking.
    pub fn wquery(&self, k: usize, boosts: &HashMap<BoostKey, f64>, prefixes: &[String]) -> Vec<String> {
        let matched = self.matching_ids(prefixes);
        self.rank(matched, boosts, k)
    }

    fn matching_ids(&self, prefixes: &[String]) -> HashSet<String> {
        let mut prefixes = prefixes.iter().filter_map(|p| normalize(p));
        let Some(first) = prefixes.next() else {
            return HashSet::new();
        };
        let mut matched = self.trie.search(&first);
        for prefix in prefixes {
            if matched.is_empty() {
                break;
            }
            let next = self.trie.search(&prefix);
            matched = matched.intersection(&next).cloned().collect();
        }
        matched
    }

    fn rank(&self, ids: HashSet<String>, boosts: &HashMap<BoostKey, f64>, k: usize) -> Vec<String> {
        let mut ranked: Vec<(f64, &Entry)> = ids
            .iter()
            .filter_map(|id| self.entries.get(id))
            .map(|entry| (effective_score(entry, boosts), entry))
            .collect();

        ranked.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        ranked.into_iter().take(k).map(|(_, e)| e.id.clone()).collect()
    }
}

fn effective_score(entry: &Entry, boosts: &HashMap<BoostKey, f64>) -> f64 {
    let mut score = entry.score;
    if let Some(factor) = boosts.get(&BoostKey::Type(entry.kind)) {
        score *= factor;
    }
    if let Some(factor) = boosts.get(&BoostKey::Id(entry.id.clone())) {
        score *= factor;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(session: &mut Session, kind: EntryType, id: &str, score: f64, data: &str) {
        session.add(kind, id.to_string(), score, data.to_string());
    }

    #[test]
    fn query_ranks_by_score_descending() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.3, "how do I even");
        add(&mut session, EntryType::Question, "q2", 0.9, "how not to");
        assert_eq!(session.query(10, &["how".to_string()]), vec!["q2", "q1"]);
    }

    #[test]
    fn ties_break_by_most_recent_insertion() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        add(&mut session, EntryType::Question, "q2", 0.5, "cats");
        assert_eq!(session.query(10, &["cat".to_string()]), vec!["q2", "q1"]);
    }

    #[test]
    fn multiple_prefixes_intersect() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "red fish");
        add(&mut session, EntryType::Question, "q2", 0.5, "red herring");
        let prefixes = vec!["red".to_string(), "fi".to_string()];
        assert_eq!(session.query(10, &prefixes), vec!["q1"]);
    }

    #[test]
    fn query_truncates_to_k() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.9, "cats");
        add(&mut session, EntryType::Question, "q2", 0.8, "cats");
        add(&mut session, EntryType::Question, "q3", 0.7, "cats");
        assert_eq!(session.query(2, &["cat".to_string()]), vec!["q1", "q2"]);
    }

    #[test]
    fn wquery_applies_type_and_id_boosts() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        add(&mut session, EntryType::Board, "b1", 0.5, "cats");
        let mut boosts = HashMap::new();
        boosts.insert(BoostKey::Type(EntryType::Board), 3.0);
        assert_eq!(session.wquery(10, &boosts, &["cat".to_string()]), vec!["b1", "q1"]);
    }

    #[test]
    fn type_and_id_boosts_both_apply_multiplicatively() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.1, "cats");
        add(&mut session, EntryType::Question, "q2", 0.5, "cats");
        let mut boosts = HashMap::new();
        boosts.insert(BoostKey::Type(EntryType::Question), 2.0);
        boosts.insert(BoostKey::Id("q1".to_string()), 10.0);
        // q1: 0.1 * 2.0 * 10.0 = 2.0, q2: 0.5 * 2.0 = 1.0
        assert_eq!(session.wquery(10, &boosts, &["cat".to_string()]), vec!["q1", "q2"]);
    }

    #[test]
    fn deleting_an_entry_removes_it_from_results() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        session.delete("q1");
        assert!(session.query(10, &["cat".to_string()]).is_empty());
    }

    #[test]
    fn re_adding_an_id_replaces_it_and_resets_its_recency() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        add(&mut session, EntryType::Question, "q2", 0.5, "cats");
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        assert_eq!(session.query(10, &["cat".to_string()]), vec!["q1", "q2"]);
    }

    #[test]
    fn deleting_an_unknown_id_is_a_no_op() {
        let mut session = Session::new();
        add(&mut session, EntryType::Question, "q1", 0.5, "cats");
        session.delete("nonexistent");
        assert_eq!(session.query(10, &["cat".to_string()]), vec!["q1"]);
    }
}
