use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{Comment, CommentAuthor, CommentId, ReactionCount};

mod content;
pub use content::{
    AspectRatio, Attendee, Content, Event, EventHost, EventStatus, FieldType, Form, FormField,
    Image, Link, Poll, PollOption, PollOptionId, Video,
};

mod engagement;
pub use engagement::{Engagement, ReactionKey, RsvpChoice, RsvpCounts};

mod error;
pub use error::Error;

mod notification;
pub use notification::Notification;

mod post;
pub use post::{Author, Badge, EngagementStyle, FeedEntry, Post, PostId};
