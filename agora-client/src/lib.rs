mod card;
pub use card::{Interaction, SocialCard};

mod comment;
pub use comment::{CommentList, CommentNode};

mod config;
pub use config::{CardConfig, ReactionEmoji};

mod content;
pub use content::{truncate, Block, BlockKind, ContentExt, EventLayout, FormLayout, ImageLayout};

mod engagement;
pub use engagement::{EngagementController, PrimaryAction, SecondaryAction};

mod format;
pub use format::{compact_count, time_ago};

mod fuzz;

mod poll;
pub use poll::{PollEngine, PollResult};

mod presentation;
pub use presentation::PresentationMode;

mod reaction;
pub use reaction::{ReactionCounterMap, ReactionToggle};

pub mod api {
    pub use agora_api::*;
}

pub mod prelude {
    pub use crate::ContentExt;
}
