use std::{fmt, str::FromStr};

use crate::{Comment, Content, Engagement, Error, Time, STUB_UUID};

use uuid::Uuid;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn stub() -> PostId {
        PostId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Badge {
    pub text: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub avatar: String,
    /// Space the post was made in, eg. "Announcements"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementStyle {
    #[default]
    Default,
    Reactions,
    Upvote,
    Event,
}

impl EngagementStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementStyle::Default => "default",
            EngagementStyle::Reactions => "reactions",
            EngagementStyle::Upvote => "upvote",
            EngagementStyle::Event => "event",
        }
    }
}

impl fmt::Display for EngagementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngagementStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<EngagementStyle, Error> {
        match s {
            "default" => Ok(EngagementStyle::Default),
            "reactions" => Ok(EngagementStyle::Reactions),
            "upvote" => Ok(EngagementStyle::Upvote),
            "event" => Ok(EngagementStyle::Event),
            _ => Err(Error::UnknownEngagementStyle(String::from(s))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub posted_at: Time,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub engagement_style: EngagementStyle,
}

/// A post together with the comment thread the host supplies for it.
///
/// `comments` is always explicit, an empty list means there are no comments.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FeedEntry {
    pub post: Post,
    #[serde(default)]
    pub comments: Vec<Comment>,
}
