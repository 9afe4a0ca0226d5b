use std::collections::BTreeMap;

use crate::{ReactionKey, Time};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn new(id: impl Into<String>) -> CommentId {
        CommentId(id.into())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentAuthor {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReactionCount {
    pub count: u64,
    pub has_user_reacted: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: CommentAuthor,
    pub content: String,
    pub posted_at: Time,

    #[serde(default)]
    pub reactions: BTreeMap<ReactionKey, ReactionCount>,

    /// Pinned comments are always listed before the others
    #[serde(default)]
    pub is_pinned: bool,

    /// Replies, in display order
    #[serde(default)]
    pub children: Vec<Comment>,
}
