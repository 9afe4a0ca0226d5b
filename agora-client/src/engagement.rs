use crate::{
    api::{Engagement, EngagementStyle, Notification, ReactionKey, RsvpChoice},
    CardConfig,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrimaryAction {
    Like,
    Upvote,
    Downvote,
    React(ReactionKey),
    /// Opens the full reaction palette
    MoreReactions,
    Rsvp(RsvpChoice),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SecondaryAction {
    ToggleComments,
    Share,
    Bookmark,
}

/// Local engagement state of one post, for one engagement style.
///
/// Every handler applies its change right away and returns the
/// notification to forward to the host. Handlers for actions that are not
/// part of the current style do nothing and return `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngagementController {
    style: EngagementStyle,
    state: Engagement,
    palette_open: bool,
}

fn increment(counter: &mut u64) {
    *counter = counter.saturating_add(1);
}

fn decrement(counter: &mut u64) {
    *counter = counter.saturating_sub(1);
}

impl EngagementController {
    pub fn new(style: EngagementStyle, state: Engagement) -> EngagementController {
        EngagementController {
            style,
            state,
            palette_open: false,
        }
    }

    pub fn style(&self) -> EngagementStyle {
        self.style
    }

    pub fn state(&self) -> &Engagement {
        &self.state
    }

    pub fn is_palette_open(&self) -> bool {
        self.palette_open
    }

    pub fn primary_actions(&self, cfg: &CardConfig) -> Vec<PrimaryAction> {
        match self.style {
            EngagementStyle::Default => vec![PrimaryAction::Like],
            EngagementStyle::Upvote => vec![PrimaryAction::Upvote, PrimaryAction::Downvote],
            EngagementStyle::Reactions => cfg
                .quick_reactions
                .iter()
                .map(|r| PrimaryAction::React(r.key.clone()))
                .chain(std::iter::once(PrimaryAction::MoreReactions))
                .collect(),
            EngagementStyle::Event => RsvpChoice::ALL
                .iter()
                .map(|c| PrimaryAction::Rsvp(*c))
                .collect(),
        }
    }

    pub fn secondary_actions(&self) -> [SecondaryAction; 3] {
        [
            SecondaryAction::ToggleComments,
            SecondaryAction::Share,
            SecondaryAction::Bookmark,
        ]
    }

    fn has_style(&self, style: EngagementStyle, action: &str) -> bool {
        if self.style != style {
            tracing::warn!(
                current = %self.style,
                action,
                "ignoring action not available for this engagement style"
            );
            return false;
        }
        true
    }

    pub fn like(&mut self) -> Option<Notification> {
        if !self.has_style(EngagementStyle::Default, "like") {
            return None;
        }
        match self.state.is_liked {
            true => decrement(&mut self.state.likes),
            false => increment(&mut self.state.likes),
        }
        self.state.is_liked = !self.state.is_liked;
        Some(Notification::Like)
    }

    pub fn upvote(&mut self) -> Option<Notification> {
        if !self.has_style(EngagementStyle::Upvote, "upvote") {
            return None;
        }
        let s = &mut self.state;
        if s.is_downvoted {
            s.is_downvoted = false;
            decrement(&mut s.downvotes);
        }
        match s.is_upvoted {
            true => decrement(&mut s.upvotes),
            false => increment(&mut s.upvotes),
        }
        s.is_upvoted = !s.is_upvoted;
        Some(Notification::Upvote)
    }

    pub fn downvote(&mut self) -> Option<Notification> {
        if !self.has_style(EngagementStyle::Upvote, "downvote") {
            return None;
        }
        let s = &mut self.state;
        if s.is_upvoted {
            s.is_upvoted = false;
            decrement(&mut s.upvotes);
        }
        match s.is_downvoted {
            true => decrement(&mut s.downvotes),
            false => increment(&mut s.downvotes),
        }
        s.is_downvoted = !s.is_downvoted;
        Some(Notification::Downvote)
    }

    /// Count shown next to a reaction chip
    pub fn reaction_count(&self, key: &ReactionKey) -> u64 {
        self.state.reactions.get(key).copied().unwrap_or(0)
    }

    fn take_reaction(&mut self, key: &ReactionKey) {
        if let Some(c) = self.state.reactions.get_mut(key) {
            decrement(c);
            if *c == 0 {
                self.state.reactions.remove(key);
            }
        }
    }

    /// Selects a reaction, replacing the user's previous one. Selecting the
    /// active reaction again clears it.
    pub fn react(&mut self, key: ReactionKey) -> Option<Notification> {
        if !self.has_style(EngagementStyle::Reactions, "react") {
            return None;
        }
        self.palette_open = false;
        match self.state.user_reaction.take() {
            Some(previous) if previous == key => self.take_reaction(&previous),
            previous => {
                if let Some(previous) = previous {
                    self.take_reaction(&previous);
                }
                increment(self.state.reactions.entry(key.clone()).or_insert(0));
                self.state.user_reaction = Some(key.clone());
            }
        }
        Some(Notification::Reaction(key))
    }

    pub fn toggle_palette(&mut self) {
        if self.has_style(EngagementStyle::Reactions, "toggle-palette") {
            self.palette_open = !self.palette_open;
        }
    }

    pub fn dismiss_palette(&mut self) {
        self.palette_open = false;
    }

    pub fn rsvp(&mut self, choice: RsvpChoice) -> Option<Notification> {
        if !self.has_style(EngagementStyle::Event, "rsvp") {
            return None;
        }
        let s = &mut self.state;
        if let Some(previous) = s.user_rsvp {
            decrement(s.rsvp.get_mut(previous));
        }
        if s.user_rsvp == Some(choice) {
            s.user_rsvp = None;
        } else {
            s.user_rsvp = Some(choice);
            increment(s.rsvp.get_mut(choice));
        }
        Some(Notification::Rsvp(choice))
    }

    pub fn toggle_bookmark(&mut self) -> Notification {
        self.state.is_bookmarked = !self.state.is_bookmarked;
        Notification::Bookmark
    }

    pub fn share(&self) -> Notification {
        Notification::Share
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(style: EngagementStyle, state: Engagement) -> EngagementController {
        EngagementController::new(style, state)
    }

    #[test]
    fn like_toggles() {
        let mut c = controller(
            EngagementStyle::Default,
            Engagement {
                likes: 10,
                ..Engagement::default()
            },
        );
        assert_eq!(c.like(), Some(Notification::Like));
        assert_eq!(c.state().likes, 11);
        assert!(c.state().is_liked);
        c.like();
        assert_eq!(c.state().likes, 10);
        assert!(!c.state().is_liked);
    }

    #[test]
    fn like_clamps_at_zero() {
        let mut c = controller(
            EngagementStyle::Default,
            Engagement {
                is_liked: true,
                likes: 0,
                ..Engagement::default()
            },
        );
        c.like();
        assert_eq!(c.state().likes, 0);
        assert!(!c.state().is_liked);
    }

    #[test]
    fn counters_saturate() {
        let mut c = controller(
            EngagementStyle::Default,
            Engagement {
                likes: u64::MAX,
                ..Engagement::default()
            },
        );
        c.like();
        assert_eq!(c.state().likes, u64::MAX);
        assert!(c.state().is_liked);

        let mut c = controller(
            EngagementStyle::Event,
            Engagement {
                rsvp: crate::api::RsvpCounts {
                    yes: u64::MAX,
                    no: u64::MAX,
                    maybe: 0,
                },
                ..Engagement::default()
            },
        );
        c.rsvp(RsvpChoice::Yes);
        assert_eq!(c.state().rsvp.yes, u64::MAX);
        assert_eq!(c.state().rsvp.total(), u64::MAX);

        let fire = ReactionKey::new("fire");
        let mut c = controller(
            EngagementStyle::Reactions,
            Engagement {
                reactions: [(fire.clone(), u64::MAX)].into_iter().collect(),
                ..Engagement::default()
            },
        );
        c.react(fire.clone());
        assert_eq!(c.reaction_count(&fire), u64::MAX);
    }

    #[test]
    fn initial_rsvp_with_empty_counter() {
        let mut c = controller(
            EngagementStyle::Event,
            Engagement {
                user_rsvp: Some(RsvpChoice::Yes),
                ..Engagement::default()
            },
        );
        c.rsvp(RsvpChoice::No);
        let s = c.state();
        assert_eq!(s.user_rsvp, Some(RsvpChoice::No));
        assert_eq!((s.rsvp.yes, s.rsvp.no, s.rsvp.maybe), (0, 1, 0));
        c.rsvp(RsvpChoice::No);
        assert_eq!(c.state().rsvp.total(), 0);
    }

    #[test]
    fn initial_reaction_with_missing_entry() {
        let fire = ReactionKey::new("fire");
        let clap = ReactionKey::new("clap");
        let mut c = controller(
            EngagementStyle::Reactions,
            Engagement {
                user_reaction: Some(fire.clone()),
                ..Engagement::default()
            },
        );
        c.react(clap.clone());
        assert_eq!(c.state().user_reaction, Some(clap.clone()));
        assert!(!c.state().reactions.contains_key(&fire));
        assert_eq!(c.reaction_count(&clap), 1);

        let mut c = controller(
            EngagementStyle::Reactions,
            Engagement {
                user_reaction: Some(fire.clone()),
                ..Engagement::default()
            },
        );
        c.react(fire.clone());
        assert_eq!(c.state().user_reaction, None);
        assert!(c.state().reactions.is_empty());
    }

    #[test]
    fn upvote_then_downvote() {
        let mut c = controller(
            EngagementStyle::Upvote,
            Engagement {
                upvotes: 5,
                downvotes: 2,
                ..Engagement::default()
            },
        );
        assert_eq!(c.upvote(), Some(Notification::Upvote));
        assert_eq!(c.downvote(), Some(Notification::Downvote));
        let s = c.state();
        assert!(!s.is_upvoted);
        assert!(s.is_downvoted);
        assert_eq!(s.upvotes, 5);
        assert_eq!(s.downvotes, 3);
    }

    #[test]
    fn upvote_toggles_off() {
        let mut c = controller(EngagementStyle::Upvote, Engagement::default());
        c.upvote();
        c.upvote();
        assert!(!c.state().is_upvoted);
        assert_eq!(c.state().upvotes, 0);
    }

    #[test]
    fn wrong_style_is_ignored() {
        let mut c = controller(EngagementStyle::Default, Engagement::default());
        assert_eq!(c.upvote(), None);
        assert_eq!(c.rsvp(RsvpChoice::Yes), None);
        assert_eq!(c.react(ReactionKey::new("fire")), None);
        assert_eq!(c.state(), &Engagement::default());
    }

    #[test]
    fn rsvp_same_choice_twice_is_net_zero() {
        let mut c = controller(
            EngagementStyle::Event,
            Engagement {
                rsvp: crate::api::RsvpCounts {
                    yes: 3,
                    no: 1,
                    maybe: 0,
                },
                ..Engagement::default()
            },
        );
        c.rsvp(RsvpChoice::Yes);
        assert_eq!(c.state().rsvp.yes, 4);
        c.rsvp(RsvpChoice::Yes);
        assert_eq!(c.state().user_rsvp, None);
        assert_eq!(c.state().rsvp.yes, 3);
    }

    #[test]
    fn rsvp_switch_moves_the_count() {
        let mut c = controller(EngagementStyle::Event, Engagement::default());
        c.rsvp(RsvpChoice::Maybe);
        c.rsvp(RsvpChoice::No);
        let s = c.state();
        assert_eq!(s.user_rsvp, Some(RsvpChoice::No));
        assert_eq!((s.rsvp.yes, s.rsvp.no, s.rsvp.maybe), (0, 1, 0));
    }

    #[test]
    fn reactions_replace_each_other() {
        let mut c = controller(EngagementStyle::Reactions, Engagement::default());
        let fire = ReactionKey::new("fire");
        let clap = ReactionKey::new("clap");
        c.toggle_palette();
        assert!(c.is_palette_open());
        assert_eq!(c.react(fire.clone()), Some(Notification::Reaction(fire.clone())));
        assert!(!c.is_palette_open());
        c.react(clap.clone());
        assert_eq!(c.state().user_reaction, Some(clap.clone()));
        assert_eq!(c.reaction_count(&fire), 0);
        assert!(!c.state().reactions.contains_key(&fire));
        assert_eq!(c.reaction_count(&clap), 1);
        c.react(clap.clone());
        assert_eq!(c.state().user_reaction, None);
        assert!(c.state().reactions.is_empty());
    }

    #[test]
    fn primary_actions_per_style() {
        let cfg = CardConfig::default();
        let c = controller(EngagementStyle::Upvote, Engagement::default());
        assert_eq!(
            c.primary_actions(&cfg),
            vec![PrimaryAction::Upvote, PrimaryAction::Downvote]
        );
        let c = controller(EngagementStyle::Reactions, Engagement::default());
        let actions = c.primary_actions(&cfg);
        assert_eq!(actions.len(), cfg.quick_reactions.len() + 1);
        assert_eq!(actions.last(), Some(&PrimaryAction::MoreReactions));
        let c = controller(EngagementStyle::Event, Engagement::default());
        assert_eq!(c.primary_actions(&cfg).len(), 3);
    }

    #[test]
    fn bookmark_is_available_everywhere() {
        let mut c = controller(EngagementStyle::Event, Engagement::default());
        assert_eq!(c.toggle_bookmark(), Notification::Bookmark);
        assert!(c.state().is_bookmarked);
        c.toggle_bookmark();
        assert!(!c.state().is_bookmarked);
        assert_eq!(c.share(), Notification::Share);
    }
}
