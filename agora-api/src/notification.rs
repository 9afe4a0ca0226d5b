use crate::{PollOptionId, ReactionKey, RsvpChoice};

/// Fire-and-forget notification sent to the host after a local change
/// has already been applied.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Notification {
    Like,
    Comment,
    Share,
    Bookmark,
    Upvote,
    Downvote,
    Reaction(ReactionKey),
    Rsvp(RsvpChoice),
    PollVote(PollOptionId),
    AddComment(String),
    More,
}
