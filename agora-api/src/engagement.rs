use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::Error;

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ReactionKey(pub String);

impl ReactionKey {
    pub fn new(key: impl Into<String>) -> ReactionKey {
        ReactionKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RsvpChoice {
    Yes,
    No,
    Maybe,
}

impl RsvpChoice {
    pub const ALL: [RsvpChoice; 3] = [RsvpChoice::Yes, RsvpChoice::No, RsvpChoice::Maybe];

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpChoice::Yes => "yes",
            RsvpChoice::No => "no",
            RsvpChoice::Maybe => "maybe",
        }
    }
}

impl fmt::Display for RsvpChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<RsvpChoice, Error> {
        match s {
            "yes" => Ok(RsvpChoice::Yes),
            "no" => Ok(RsvpChoice::No),
            "maybe" => Ok(RsvpChoice::Maybe),
            _ => Err(Error::UnknownRsvpChoice(String::from(s))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RsvpCounts {
    pub yes: u64,
    pub no: u64,
    pub maybe: u64,
}

impl RsvpCounts {
    pub fn get(&self, choice: RsvpChoice) -> u64 {
        match choice {
            RsvpChoice::Yes => self.yes,
            RsvpChoice::No => self.no,
            RsvpChoice::Maybe => self.maybe,
        }
    }

    pub fn get_mut(&mut self, choice: RsvpChoice) -> &mut u64 {
        match choice {
            RsvpChoice::Yes => &mut self.yes,
            RsvpChoice::No => &mut self.no,
            RsvpChoice::Maybe => &mut self.maybe,
        }
    }

    pub fn total(&self) -> u64 {
        self.yes.saturating_add(self.no).saturating_add(self.maybe)
    }
}

/// Engagement counters and the current user's flags for one post.
///
/// Missing fields deserialize to zero / false / empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub upvotes: u64,
    pub downvotes: u64,

    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub is_upvoted: bool,
    pub is_downvoted: bool,

    pub reactions: BTreeMap<ReactionKey, u64>,
    /// At most one active reaction per user at the post level
    pub user_reaction: Option<ReactionKey>,

    pub rsvp: RsvpCounts,
    pub user_rsvp: Option<RsvpChoice>,
}
