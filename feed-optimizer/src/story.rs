/// A single feed item. Immutable after creation; destroyed only by expiry
/// (see [`crate::Session::prune`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Story {
    /// Assigned 1, 2, 3, ... in arrival order of `story` commands.
    pub id: u64,
    pub time: u64,
    pub score: u64,
    pub height: u32,
}
