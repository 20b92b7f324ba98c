use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::story::Story;

/// A single Feed Optimizer session: a time-windowed corpus of stories
/// grouped by pixel height, each bucket kept sorted by descending score
/// (ties broken by insertion order).
pub struct Session {
    time_window: u64,
    browser_height: u32,
    by_id: HashMap<u64, Story>,
    /// height -> stories, descending score, ties keep earlier (lower) id first.
    buckets: HashMap<u32, Vec<Story>>,
    next_id: u64,
    oldest_id: u64,
}

impl Session {
    pub fn new(time_window: u64, browser_height: u32) -> Self {
        Self {
            time_window,
            browser_height,
            by_id: HashMap::new(),
            buckets: HashMap::new(),
            next_id: 0,
            oldest_id: 1,
        }
    }

    pub fn browser_height(&self) -> u32 {
        self.browser_height
    }

    pub(crate) fn by_id(&self) -> &HashMap<u64, Story> {
        &self.by_id
    }

    pub(crate) fn buckets(&self) -> &HashMap<u32, Vec<Story>> {
        &self.buckets
    }

    /// Assigns the next id, inserts into both structures, and returns the
    /// new story's id.
    pub fn add_story(&mut self, time: u64, score: u64, height: u32) -> u64 {
        self.next_id += 1;
        let story = Story {
            id: self.next_id,
            time,
            score,
            height,
        };
        self.by_id.insert(story.id, story);

        let bucket = self.buckets.entry(height).or_default();
        // Insert after all existing entries of equal or greater score so
        // ties keep the older (lower-id) story first.
        let pos = bucket
            .iter()
            .position(|s| score > s.score)
            .unwrap_or(bucket.len());
        bucket.insert(pos, story);

        log::debug!(
            "added story {} (time={time}, score={score}, height={height})",
            story.id
        );
        story.id
    }

    /// Removes the story with `story_id` from both structures.
    ///
    /// Fails with [`Error::MissingStory`] if it is absent from either one
    /// (an internal-consistency condition; normal command sequences never
    /// trigger it).
    pub fn remove(&mut self, story_id: u64) -> Result<()> {
        let story = self
            .by_id
            .remove(&story_id)
            .ok_or(Error::MissingStory(story_id))?;

        let bucket = self
            .buckets
            .get_mut(&story.height)
            .ok_or(Error::MissingStory(story_id))?;
        let pos = bucket
            .iter()
            .position(|s| s.id == story_id)
            .ok_or(Error::MissingStory(story_id))?;
        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&story.height);
        }
        Ok(())
    }

    /// Removes every story whose time is strictly less than `cutoff`,
    /// walking `oldest_id` upward and stopping on the first survivor.
    pub fn prune(&mut self, cutoff: u64) -> Result<()> {
        loop {
            match self.by_id.get(&self.oldest_id) {
                Some(story) if story.time < cutoff => {
                    let expired = self.oldest_id;
                    self.remove(expired)?;
                    log::debug!("expired story {expired} (cutoff={cutoff})");
                    self.oldest_id += 1;
                }
                _ => break,
            }
        }
        Ok(())
    }

    pub fn time_window(&self) -> u64 {
        self.time_window
    }
}
