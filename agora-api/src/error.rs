#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown engagement style {0:?}")]
    UnknownEngagementStyle(String),

    #[error("Unknown RSVP choice {0:?}")]
    UnknownRsvpChoice(String),

    #[error("Invalid interaction {0:?}")]
    InvalidInteraction(String),
}
