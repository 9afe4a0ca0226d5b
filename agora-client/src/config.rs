use crate::api::ReactionKey;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReactionEmoji {
    pub key: ReactionKey,
    pub emoji: String,
    pub label: String,
}

impl ReactionEmoji {
    fn new(key: &str, emoji: &str, label: &str) -> ReactionEmoji {
        ReactionEmoji {
            key: ReactionKey::new(key),
            emoji: String::from(emoji),
            label: String::from(label),
        }
    }
}

/// Knobs of the card rendering, overridable by the host.
///
/// Missing fields keep their default value.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct CardConfig {
    /// Reaction chips always shown for the reactions engagement style
    pub quick_reactions: Vec<ReactionEmoji>,

    /// Reactions offered by the "add more" picker
    pub palette: Vec<ReactionEmoji>,

    /// Descriptions longer than this get cut in preview mode
    pub preview_description_chars: usize,

    /// Replies deeper than this are no longer indented further
    pub max_reply_depth_indent: usize,
}

impl Default for CardConfig {
    fn default() -> CardConfig {
        CardConfig {
            quick_reactions: vec![
                ReactionEmoji::new("heart", "🙏", "Thanks"),
                ReactionEmoji::new("clap", "👏", "Clap"),
                ReactionEmoji::new("fire", "🔥", "Fire"),
            ],
            palette: vec![
                ReactionEmoji::new("love", "❤️", "Love"),
                ReactionEmoji::new("like", "👍", "Like"),
                ReactionEmoji::new("dislike", "👎", "Dislike"),
                ReactionEmoji::new("fire", "🔥", "Fire"),
                ReactionEmoji::new("laugh", "😂", "Laugh"),
                ReactionEmoji::new("wow", "😮", "Wow"),
                ReactionEmoji::new("sad", "😢", "Sad"),
                ReactionEmoji::new("angry", "😡", "Angry"),
            ],
            preview_description_chars: 140,
            max_reply_depth_indent: 4,
        }
    }
}

impl CardConfig {
    /// Looks a reaction up in both the quick set and the palette
    pub fn emoji_for(&self, key: &ReactionKey) -> Option<&ReactionEmoji> {
        self.quick_reactions
            .iter()
            .chain(self.palette.iter())
            .find(|r| r.key == *key)
    }
}
