use std::collections::{HashMap, HashSet};

/// An edge out of a node: the label spelled while following it, and the
/// node it leads to.
#[derive(Debug, Default)]
struct Child {
    label: String,
    node: Node,
}

/// A trie node. Every non-root node carries the ids of every entry whose
/// data contains a word for which this node's path-from-root is a prefix
/// (including the word itself). No non-root node ever has empty
/// `entry_ids` — it is pruned as soon as its last id is removed.
#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Child>,
    entry_ids: HashSet<String>,
}

impl Node {
    fn leaf(id: &str) -> Node {
        let mut node = Node::default();
        node.entry_ids.insert(id.to_string());
        node
    }

    /// Adds `id` for the remaining `word`, recording `id` on every node the
    /// insertion passes through, including `self`.
    fn add(&mut self, word: &str, id: &str) {
        self.entry_ids.insert(id.to_string());
        if word.is_empty() {
            return;
        }
        self.add_child(word, id);
    }

    fn add_child(&mut self, word: &str, id: &str) {
        let first = word.chars().next().expect("word checked non-empty");
        match self.children.remove(&first) {
            None => {
                self.children.insert(
                    first,
                    Child {
                        label: word.to_string(),
                        node: Node::leaf(id),
                    },
                );
            }
            Some(mut child) => {
                let shared = common_prefix_len(word, &child.label);
                let label_len = child.label.chars().count();
                if shared == label_len {
                    let remainder = skip_chars(word, shared);
                    child.node.add(&remainder, id);
                    self.children.insert(first, child);
                } else {
                    let shared_label = take_chars(&child.label, shared);
                    let child_remainder = skip_chars(&child.label, shared);
                    let mut intermediate = Node::default();
                    intermediate.entry_ids = child.node.entry_ids.clone();
                    let child_first =
                        child_remainder.chars().next().expect("split leaves a remainder");
                    intermediate.children.insert(
                        child_first,
                        Child {
                            label: child_remainder,
                            node: child.node,
                        },
                    );
                    let word_remainder = skip_chars(word, shared);
                    intermediate.add(&word_remainder, id);
                    self.children.insert(
                        first,
                        Child {
                            label: shared_label,
                            node: intermediate,
                        },
                    );
                }
            }
        }
    }

    /// Returns what the caller holding the edge into `self` should do after
    /// `id` has been removed along the rest of the path.
    fn delete(&mut self, word: &str, id: &str) -> DeleteSignal {
        self.entry_ids.remove(id);

        if !word.is_empty() {
            let first = word.chars().next().expect("word checked non-empty");
            if let Some(child) = self.children.get_mut(&first) {
                if let Some(remainder) = word.strip_prefix(child.label.as_str()) {
                    match child.node.delete(remainder, id) {
                        DeleteSignal::Keep => {}
                        DeleteSignal::Prune => {
                            self.children.remove(&first);
                        }
                        DeleteSignal::Collapse {
                            extra_label,
                            replacement,
                        } => {
                            let mut label = child.label.clone();
                            label.push_str(&extra_label);
                            self.children.insert(
                                first,
                                Child {
                                    label,
                                    node: *replacement,
                                },
                            );
                        }
                    }
                }
                // else: `word` was never indexed down this path; no-op.
            }
        }

        if self.entry_ids.is_empty() {
            return DeleteSignal::Prune;
        }

        if self.children.len() == 1 {
            let only_key = *self.children.keys().next().expect("len checked == 1");
            let collapses = self.children[&only_key].node.entry_ids == self.entry_ids;
            if collapses {
                let child = self.children.remove(&only_key).expect("key just observed");
                log::trace!("collapsing single-child edge {:?}", child.label);
                return DeleteSignal::Collapse {
                    extra_label: child.label,
                    replacement: Box::new(child.node),
                };
            }
        }

        DeleteSignal::Keep
    }

    /// Looks up the ids reachable under `prefix`, or `None` if nothing in
    /// the trie shares it.
    fn search<'a>(&'a self, prefix: &str) -> Option<&'a HashSet<String>> {
        let first = prefix.chars().next()?;
        let child = self.children.get(&first)?;
        if let Some(remainder) = prefix.strip_prefix(child.label.as_str()) {
            if remainder.is_empty() {
                Some(&child.node.entry_ids)
            } else {
                child.node.search(remainder)
            }
        } else if child.label.starts_with(prefix) {
            Some(&child.node.entry_ids)
        } else {
            None
        }
    }
}

enum DeleteSignal {
    Keep,
    Prune,
    Collapse {
        extra_label: String,
        replacement: Box<Node>,
    },
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn skip_chars(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}

/// A compressed radix trie mapping indexed words to the ids of the entries
/// that contain them.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn add(&mut self, word: &str, id: &str) {
        if word.is_empty() {
            return;
        }
        self.root.add_child(word, id);
    }

    pub fn delete(&mut self, word: &str, id: &str) {
        if word.is_empty() {
            return;
        }
        let first = word.chars().next().expect("word checked non-empty");
        if let Some(child) = self.root.children.get_mut(&first) {
            if let Some(remainder) = word.strip_prefix(child.label.as_str()) {
                match child.node.delete(remainder, id) {
                    DeleteSignal::Keep => {}
                    DeleteSignal::Prune => {
                        self.root.children.remove(&first);
                    }
                    DeleteSignal::Collapse {
                        extra_label,
                        replacement,
                    } => {
                        let mut label = child.label.clone();
                        label.push_str(&extra_label);
                        self.root.children.insert(
                            first,
                            Child {
                                label,
                                node: *replacement,
                            },
                        );
                    }
                }
            }
        }
    }

    /// Returns a fresh copy of the ids stored under `prefix`, or an empty
    /// set if nothing matches.
    pub fn search(&self, prefix: &str) -> HashSet<String> {
        if prefix.is_empty() {
            return HashSet::new();
        }
        self.root.search(prefix).cloned().unwrap_or_default()
    }
}
