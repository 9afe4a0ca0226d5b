mod app;
pub use app::{App, FeedState};

mod card_header;
pub use card_header::CardHeader;

mod comments_section;
pub use comments_section::CommentsSection;

mod content_blocks;
pub use content_blocks::content_blocks;

mod engagement_bar;
pub use engagement_bar::EngagementBar;

mod event_block;
pub use event_block::EventBlock;

mod feed_banner;
pub use feed_banner::FeedBanner;

mod form_block;
pub use form_block::FormBlock;

mod images_block;
pub use images_block::ImagesBlock;

mod link_block;
pub use link_block::LinkBlock;

mod overlay;
pub use overlay::Overlay;

mod poll_block;
pub use poll_block::PollBlock;

mod reaction_palette;
pub use reaction_palette::ReactionPalette;

mod social_card;
pub use social_card::SocialCardView;

mod video_block;
pub use video_block::VideoBlock;
