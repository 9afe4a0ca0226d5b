use std::str::FromStr;

use crate::{
    api::{
        Author, CommentId, Content, Error, FeedEntry, Notification, PollOptionId, Post, PostId,
        ReactionKey, RsvpChoice, Time,
    },
    Block, CommentList, ContentExt, EngagementController, EventLayout, FormLayout, PollEngine,
    PresentationMode,
};

/// Every input a user can give to a card
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Interaction {
    Like,
    Upvote,
    Downvote,
    React(ReactionKey),
    TogglePalette,
    DismissPalette,
    Rsvp(RsvpChoice),
    ToggleBookmark,
    Share,
    ToggleComments,
    More,
    PollVote(PollOptionId),

    OpenModal,
    CloseModal,
    ToggleEventExpanded,
    ToggleFormOpen,
    SubmitForm,

    CommentReact(CommentId, ReactionKey),
    TogglePicker(CommentId),
    DismissPicker,
    EditDraft(String),
    SubmitComment,
}

impl FromStr for Interaction {
    type Err = Error;

    /// Parses the compact command-line form, eg. `like`, `rsvp:yes` or
    /// `comment-react:<comment-id>:<reaction>`
    fn from_str(s: &str) -> Result<Interaction, Error> {
        let invalid = || Error::InvalidInteraction(String::from(s));
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };
        Ok(match (verb, arg) {
            ("like", None) => Interaction::Like,
            ("upvote", None) => Interaction::Upvote,
            ("downvote", None) => Interaction::Downvote,
            ("react", Some(k)) if !k.is_empty() => Interaction::React(ReactionKey::new(k)),
            ("palette", None) => Interaction::TogglePalette,
            ("dismiss-palette", None) => Interaction::DismissPalette,
            ("rsvp", Some(c)) => Interaction::Rsvp(RsvpChoice::from_str(c)?),
            ("bookmark", None) => Interaction::ToggleBookmark,
            ("share", None) => Interaction::Share,
            ("comments", None) => Interaction::ToggleComments,
            ("more", None) => Interaction::More,
            ("vote", Some(o)) if !o.is_empty() => Interaction::PollVote(PollOptionId::new(o)),
            ("open", None) => Interaction::OpenModal,
            ("close", None) => Interaction::CloseModal,
            ("expand-event", None) => Interaction::ToggleEventExpanded,
            ("open-form", None) => Interaction::ToggleFormOpen,
            ("submit-form", None) => Interaction::SubmitForm,
            ("comment-react", Some(rest)) => match rest.rsplit_once(':') {
                Some((id, key)) if !id.is_empty() && !key.is_empty() => {
                    Interaction::CommentReact(CommentId::new(id), ReactionKey::new(key))
                }
                _ => return Err(invalid()),
            },
            ("picker", Some(id)) if !id.is_empty() => Interaction::TogglePicker(CommentId::new(id)),
            ("dismiss-picker", None) => Interaction::DismissPicker,
            ("draft", Some(text)) => Interaction::EditDraft(String::from(text)),
            ("submit-comment", None) => Interaction::SubmitComment,
            _ => return Err(invalid()),
        })
    }
}

/// Composition root of one post: all of its interaction state, shared by
/// the feed card and the detail modal.
///
/// The state is built once from the host's data. Later changes to that
/// data are not picked up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SocialCard {
    pub id: PostId,
    pub author: Author,
    pub posted_at: Time,
    content: Content,
    engagement: EngagementController,
    poll: Option<PollEngine>,
    comments: CommentList,

    modal_open: bool,
    comments_open: bool,
    event_expanded: bool,
    form_open: bool,
}

impl SocialCard {
    pub fn new(entry: FeedEntry) -> SocialCard {
        let FeedEntry { post, comments } = entry;
        SocialCard {
            id: post.id,
            author: post.author,
            posted_at: post.posted_at,
            poll: post.content.poll.clone().map(PollEngine::from),
            content: post.content,
            engagement: EngagementController::new(post.engagement_style, post.engagement),
            comments: CommentList::new(comments),
            modal_open: false,
            comments_open: true,
            event_expanded: false,
            form_open: false,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn text(&self) -> Option<&str> {
        self.content.text.as_deref()
    }

    pub fn engagement(&self) -> &EngagementController {
        &self.engagement
    }

    pub fn poll(&self) -> Option<&PollEngine> {
        self.poll.as_ref()
    }

    pub fn comments(&self) -> &CommentList {
        &self.comments
    }

    /// Lets the host append the comment it created after an `AddComment`
    pub fn comments_mut(&mut self) -> &mut CommentList {
        &mut self.comments
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_comments_open(&self) -> bool {
        self.comments_open
    }

    pub fn is_event_expanded(&self) -> bool {
        self.event_expanded
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Mode of the surface currently in front of the user
    pub fn current_mode(&self) -> PresentationMode {
        match self.modal_open {
            true => PresentationMode::modal(),
            false => PresentationMode::feed(),
        }
    }

    /// Content blocks, with the poll block carrying the live poll state
    pub fn blocks(&self) -> Vec<Block<'_, &PollEngine>> {
        self.content
            .blocks()
            .into_iter()
            .filter_map(|b| b.filter_map_poll(|_| self.poll.as_ref()))
            .collect()
    }

    pub fn event_layout(&self, mode: PresentationMode) -> EventLayout {
        EventLayout::new(mode, self.event_expanded)
    }

    pub fn form_layout(&self, mode: PresentationMode) -> FormLayout {
        FormLayout::new(mode, self.form_open)
    }

    /// Applies `interaction`, coming from a surface rendered with `mode`.
    ///
    /// Returns the notification for the host, if any.
    pub fn apply(&mut self, interaction: Interaction, mode: PresentationMode) -> Option<Notification> {
        tracing::debug!(post = ?self.id, ?interaction, ?mode, "applying interaction");
        let notification = match interaction {
            Interaction::Like => self.engagement.like(),
            Interaction::Upvote => self.engagement.upvote(),
            Interaction::Downvote => self.engagement.downvote(),
            Interaction::React(key) => self.engagement.react(key),
            Interaction::TogglePalette => {
                self.engagement.toggle_palette();
                None
            }
            Interaction::DismissPalette => {
                self.engagement.dismiss_palette();
                None
            }
            Interaction::Rsvp(choice) => self.engagement.rsvp(choice),
            Interaction::ToggleBookmark => Some(self.engagement.toggle_bookmark()),
            Interaction::Share => Some(self.engagement.share()),
            Interaction::ToggleComments => {
                self.comments_open = !self.comments_open;
                Some(Notification::Comment)
            }
            Interaction::More => Some(Notification::More),
            Interaction::PollVote(option) => {
                if !mode.is_interactive() {
                    tracing::debug!(?option, "ignoring poll vote from preview");
                    return None;
                }
                match self.poll.as_mut() {
                    None => {
                        tracing::warn!(?option, "poll vote on a post without poll");
                        None
                    }
                    Some(p) => p.vote(&option).then(|| Notification::PollVote(option)),
                }
            }
            Interaction::OpenModal => {
                self.modal_open = true;
                None
            }
            Interaction::CloseModal => {
                self.modal_open = false;
                self.engagement.dismiss_palette();
                self.comments.dismiss_picker();
                None
            }
            Interaction::ToggleEventExpanded => {
                if mode.is_in_modal && self.content.event.is_some() {
                    self.event_expanded = !self.event_expanded;
                }
                None
            }
            Interaction::ToggleFormOpen => {
                if mode.is_in_modal && self.content.form.is_some() {
                    self.form_open = !self.form_open;
                }
                None
            }
            Interaction::SubmitForm => {
                self.form_open = false;
                None
            }
            Interaction::CommentReact(id, key) => {
                self.comments.toggle_reaction(&id, &key);
                None
            }
            Interaction::TogglePicker(id) => {
                self.comments.toggle_picker(&id);
                None
            }
            Interaction::DismissPicker => {
                self.comments.dismiss_picker();
                None
            }
            Interaction::EditDraft(text) => {
                self.comments.set_draft(text);
                None
            }
            Interaction::SubmitComment => self.comments.submit_draft(),
        };
        if let Some(n) = &notification {
            tracing::trace!(post = ?self.id, notification = ?n, "notifying host");
        }
        notification
    }

    /// Current state, in the shape the host supplied it
    pub fn snapshot(&self) -> FeedEntry {
        let mut content = self.content.clone();
        content.poll = self.poll.as_ref().map(|p| p.to_api());
        FeedEntry {
            post: Post {
                id: self.id,
                author: self.author.clone(),
                posted_at: self.posted_at,
                content,
                engagement: self.engagement.state().clone(),
                engagement_style: self.engagement.style(),
            },
            comments: self.comments.to_api(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        api::{CommentAuthor, Engagement, EngagementStyle, Image, Poll, PollOption},
        BlockKind,
    };

    fn entry(style: EngagementStyle, content: Content) -> FeedEntry {
        FeedEntry {
            post: Post {
                id: PostId::stub(),
                author: Author {
                    name: String::from("Community Team"),
                    username: None,
                    avatar: String::from("team.png"),
                    category: Some(String::from("Announcements")),
                    badge: None,
                    emoji: None,
                },
                posted_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                content,
                engagement: Engagement::default(),
                engagement_style: style,
            },
            comments: vec![crate::api::Comment {
                id: CommentId::new("c1"),
                author: CommentAuthor {
                    name: String::from("Sam"),
                    avatar: String::from("sam.png"),
                },
                content: String::from("first"),
                posted_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
                reactions: BTreeMap::new(),
                is_pinned: false,
                children: vec![],
            }],
        }
    }

    fn poll_content() -> Content {
        Content {
            poll: Some(Poll {
                question: String::from("Best day for the meetup?"),
                options: vec![
                    PollOption {
                        id: PollOptionId::new("sat"),
                        text: String::from("Saturday"),
                        votes: 0,
                    },
                    PollOption {
                        id: PollOptionId::new("sun"),
                        text: String::from("Sunday"),
                        votes: 0,
                    },
                ],
                has_voted: false,
                user_vote: None,
                time_left: Some(String::from("2 days")),
            }),
            images: vec![Image {
                src: String::from("a.png"),
                alt: String::from("a"),
                aspect_ratio: None,
            }],
            ..Content::default()
        }
    }

    #[test]
    fn preview_cannot_vote() {
        let mut card = SocialCard::new(entry(EngagementStyle::Default, poll_content()));
        let vote = Interaction::PollVote(PollOptionId::new("sat"));
        assert_eq!(card.apply(vote.clone(), PresentationMode::feed()), None);
        assert!(!card.poll().unwrap().has_voted());

        assert_eq!(
            card.apply(vote, PresentationMode::modal()),
            Some(Notification::PollVote(PollOptionId::new("sat")))
        );
        assert!(card.poll().unwrap().has_voted());
        // the feed card sees the same state
        assert!(card.blocks().iter().any(|b| match b {
            Block::Poll(p) => p.results().is_some(),
            _ => false,
        }));
    }

    #[test]
    fn blocks_follow_content() {
        let card = SocialCard::new(entry(EngagementStyle::Default, poll_content()));
        let kinds = card.blocks().iter().map(|b| b.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![BlockKind::Poll, BlockKind::Images]);
    }

    #[test]
    fn modal_shares_state() {
        let mut card = SocialCard::new(entry(EngagementStyle::Default, Content::default()));
        card.apply(Interaction::Like, PresentationMode::feed());
        card.apply(Interaction::OpenModal, PresentationMode::feed());
        assert!(card.is_modal_open());
        assert!(card.engagement().state().is_liked);
        card.apply(Interaction::Like, PresentationMode::modal());
        card.apply(Interaction::CloseModal, PresentationMode::modal());
        assert!(!card.engagement().state().is_liked);
        assert_eq!(card.engagement().state().likes, 0);
    }

    #[test]
    fn event_expands_only_in_modal() {
        let content = Content {
            event: Some(crate::api::Event {
                title: String::from("Launch party"),
                starts_at: Utc.with_ymd_and_hms(2024, 3, 23, 18, 0, 0).unwrap(),
                location: Some(String::from("Community Center")),
                is_online: false,
                attendees: 12,
                category: String::from("party"),
                status: crate::api::EventStatus::Upcoming,
                host: None,
                image: None,
                description: Some(String::from("Come along")),
                roster: vec![],
            }),
            ..Content::default()
        };
        let mut card = SocialCard::new(entry(EngagementStyle::Event, content));
        card.apply(Interaction::ToggleEventExpanded, PresentationMode::feed());
        assert!(!card.is_event_expanded());
        card.apply(Interaction::OpenModal, PresentationMode::feed());
        assert_eq!(
            card.event_layout(card.current_mode()),
            EventLayout::ModalCollapsed
        );
        card.apply(Interaction::ToggleEventExpanded, PresentationMode::modal());
        assert_eq!(card.event_layout(card.current_mode()), EventLayout::Expanded);
        assert_eq!(
            card.event_layout(PresentationMode::feed()),
            EventLayout::Collapsed
        );
    }

    #[test]
    fn comments_toggle_and_submit() {
        let mut card = SocialCard::new(entry(EngagementStyle::Default, Content::default()));
        assert!(card.is_comments_open());
        assert_eq!(
            card.apply(Interaction::ToggleComments, PresentationMode::modal()),
            Some(Notification::Comment)
        );
        assert!(!card.is_comments_open());
        card.apply(
            Interaction::EditDraft(String::from(" hello ")),
            PresentationMode::modal(),
        );
        assert_eq!(
            card.apply(Interaction::SubmitComment, PresentationMode::modal()),
            Some(Notification::AddComment(String::from("hello")))
        );
        assert_eq!(card.comments().draft(), "");
    }

    #[test]
    fn comments_open_state_is_shared() {
        let mut card = SocialCard::new(entry(EngagementStyle::Upvote, Content::default()));
        card.apply(Interaction::ToggleComments, PresentationMode::feed());
        assert!(!card.is_comments_open());
        card.apply(Interaction::OpenModal, PresentationMode::feed());
        assert!(!card.is_comments_open());
        card.apply(Interaction::ToggleComments, PresentationMode::modal());
        assert!(card.is_comments_open());
    }

    #[test]
    fn form_call_to_action_opens_modal_then_form() {
        let content = Content {
            form: Some(crate::api::Form {
                title: String::from("Volunteer sign-up"),
                description: String::from("Help us out"),
                fields: vec![],
                submit_text: String::from("Sign up"),
                responses: 4,
            }),
            ..Content::default()
        };
        let mut card = SocialCard::new(entry(EngagementStyle::Default, content));
        let feed = PresentationMode::feed();
        card.apply(FormLayout::call_to_action(feed), feed);
        assert!(card.is_modal_open());
        assert_eq!(card.form_layout(card.current_mode()), FormLayout::Summary);
        let modal = card.current_mode();
        card.apply(FormLayout::call_to_action(modal), modal);
        assert_eq!(card.form_layout(modal), FormLayout::Full);
        assert_eq!(card.form_layout(feed), FormLayout::Summary);
    }

    #[test]
    fn closing_modal_closes_pickers() {
        let mut card = SocialCard::new(entry(EngagementStyle::Reactions, Content::default()));
        let modal = PresentationMode::modal();
        card.apply(Interaction::OpenModal, PresentationMode::feed());
        card.apply(Interaction::TogglePalette, modal);
        card.apply(Interaction::TogglePicker(CommentId::new("c1")), modal);
        assert!(card.engagement().is_palette_open());
        assert_eq!(card.comments().active_picker(), Some(&CommentId::new("c1")));
        card.apply(Interaction::CloseModal, modal);
        assert!(!card.engagement().is_palette_open());
        assert_eq!(card.comments().active_picker(), None);
    }

    #[test]
    fn snapshot_reflects_local_changes() {
        let mut card = SocialCard::new(entry(EngagementStyle::Default, poll_content()));
        card.apply(
            Interaction::PollVote(PollOptionId::new("sun")),
            PresentationMode::modal(),
        );
        card.apply(
            Interaction::CommentReact(CommentId::new("c1"), ReactionKey::new("smile")),
            PresentationMode::modal(),
        );
        let snap = card.snapshot();
        let poll = snap.post.content.poll.unwrap();
        assert_eq!(poll.user_vote, Some(PollOptionId::new("sun")));
        assert_eq!(poll.options[1].votes, 1);
        assert_eq!(snap.comments[0].reactions.len(), 1);
    }

    #[test]
    fn parse_interactions() {
        assert_eq!(Interaction::from_str("like"), Ok(Interaction::Like));
        assert_eq!(
            Interaction::from_str("rsvp:maybe"),
            Ok(Interaction::Rsvp(RsvpChoice::Maybe))
        );
        assert_eq!(
            Interaction::from_str("comment-react:2:1:fire"),
            Ok(Interaction::CommentReact(
                CommentId::new("2:1"),
                ReactionKey::new("fire")
            ))
        );
        assert_eq!(
            Interaction::from_str("draft:hello: world"),
            Ok(Interaction::EditDraft(String::from("hello: world")))
        );
        assert!(Interaction::from_str("rsvp:perhaps").is_err());
        assert!(Interaction::from_str("like:now").is_err());
        assert_eq!(
            Interaction::from_str("vote:"),
            Err(Error::InvalidInteraction(String::from("vote:")))
        );
    }
}
