#![cfg(test)]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::{
    api::{
        Comment, CommentAuthor, CommentId, Engagement, EngagementStyle, Poll, PollOption,
        PollOptionId, ReactionCount, ReactionKey, RsvpChoice, RsvpCounts,
    },
    CommentList, EngagementController, PollEngine, ReactionCounterMap,
};

#[derive(Clone, Copy, Debug, bolero::generator::TypeGenerator)]
enum Vote {
    Up,
    Down,
}

fn key(k: u8) -> ReactionKey {
    ReactionKey::new(format!("r{}", k % 4))
}

fn comment(id: usize, pinned: bool) -> Comment {
    Comment {
        id: CommentId::new(format!("{id}")),
        author: CommentAuthor {
            name: String::from("fuzz"),
            avatar: String::from("fuzz.png"),
        },
        content: String::new(),
        posted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        reactions: BTreeMap::new(),
        is_pinned: pinned,
        children: vec![],
    }
}

#[test]
fn upvote_downvote_exclusive() {
    bolero::check!()
        .with_type::<(u8, u8, bool, Vec<Vote>)>()
        .cloned()
        .for_each(|(up, down, start_down, votes)| {
            let initial = Engagement {
                upvotes: u64::from(up),
                downvotes: u64::from(down),
                is_downvoted: start_down,
                ..Engagement::default()
            };
            let mut ctl = EngagementController::new(EngagementStyle::Upvote, initial.clone());
            for v in votes {
                match v {
                    Vote::Up => ctl.upvote(),
                    Vote::Down => ctl.downvote(),
                };
                let s = ctl.state();
                assert!(!(s.is_upvoted && s.is_downvoted));
                // the initial downvote was already counted in `down`
                let base_down = initial.downvotes - u64::from(start_down && initial.downvotes > 0);
                assert!(s.upvotes <= initial.upvotes + u64::from(s.is_upvoted));
                assert!(s.downvotes <= base_down + u64::from(s.is_downvoted));
            }
        });
}

#[test]
fn rsvp_conservation() {
    bolero::check!()
        .with_type::<(u8, u8, u8, Option<RsvpChoice>, Vec<RsvpChoice>)>()
        .cloned()
        .for_each(|(yes, no, maybe, user_rsvp, clicks)| {
            let initial = Engagement {
                rsvp: RsvpCounts {
                    yes: u64::from(yes),
                    no: u64::from(no),
                    maybe: u64::from(maybe),
                },
                user_rsvp,
                ..Engagement::default()
            };
            // a host-side flag may come with its counter already at 0
            let own = user_rsvp.map_or(0, |c| initial.rsvp.get(c)).min(1);
            let baseline = initial.rsvp.total() - own;
            let mut ctl = EngagementController::new(EngagementStyle::Event, initial.clone());
            for c in clicks {
                ctl.rsvp(c);
                let s = ctl.state();
                assert_eq!(s.rsvp.total(), baseline + u64::from(s.user_rsvp.is_some()));
                for c in [RsvpChoice::Yes, RsvpChoice::No, RsvpChoice::Maybe] {
                    assert!(s.rsvp.get(c) <= initial.rsvp.get(c) + 1);
                }
            }
        });
}

#[test]
fn reaction_conservation() {
    bolero::check!()
        .with_type::<(Vec<(u8, u8)>, Option<u8>, Vec<u8>)>()
        .cloned()
        .for_each(|(counts, user_reaction, clicks)| {
            let initial = Engagement {
                reactions: counts
                    .into_iter()
                    .map(|(k, c)| (key(k), u64::from(c)))
                    .collect(),
                user_reaction: user_reaction.map(key),
                ..Engagement::default()
            };
            let sum = |e: &Engagement| e.reactions.values().sum::<u64>();
            let own = initial
                .user_reaction
                .as_ref()
                .and_then(|k| initial.reactions.get(k))
                .map_or(0, |c| (*c).min(1));
            let baseline = sum(&initial) - own;
            let mut ctl = EngagementController::new(EngagementStyle::Reactions, initial.clone());
            for k in clicks {
                ctl.react(key(k));
                let s = ctl.state();
                assert_eq!(sum(s), baseline + u64::from(s.user_reaction.is_some()));
                if let Some(k) = &s.user_reaction {
                    assert!(s.reactions.get(k).copied().unwrap_or(0) > 0);
                }
            }
        });
}

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum Action {
    Like,
    Upvote,
    Downvote,
    React(u8),
    Rsvp(RsvpChoice),
}

impl Action {
    fn style(&self) -> EngagementStyle {
        match self {
            Action::Like => EngagementStyle::Default,
            Action::Upvote | Action::Downvote => EngagementStyle::Upvote,
            Action::React(_) => EngagementStyle::Reactions,
            Action::Rsvp(_) => EngagementStyle::Event,
        }
    }
}

#[test]
fn foreign_actions_ignored() {
    bolero::check!()
        .with_type::<(EngagementStyle, Vec<Action>)>()
        .cloned()
        .for_each(|(style, actions)| {
            let mut ctl = EngagementController::new(style, Engagement::default());
            for a in actions {
                let before = ctl.state().clone();
                let notification = match a.clone() {
                    Action::Like => ctl.like(),
                    Action::Upvote => ctl.upvote(),
                    Action::Downvote => ctl.downvote(),
                    Action::React(k) => ctl.react(key(k)),
                    Action::Rsvp(c) => ctl.rsvp(c),
                };
                if a.style() == style {
                    assert!(notification.is_some());
                } else {
                    assert_eq!(notification, None);
                    assert_eq!(ctl.state(), &before);
                }
            }
        });
}

#[test]
fn reaction_toggle_round_trip() {
    bolero::check!()
        .with_type::<(Vec<(u8, u8, bool)>, u8)>()
        .cloned()
        .for_each(|(initial, k)| {
            let initial = initial
                .into_iter()
                .map(|(k, count, has_user_reacted)| {
                    (
                        key(k),
                        ReactionCount {
                            // a user's own reaction is counted
                            count: u64::from(count) + u64::from(has_user_reacted),
                            has_user_reacted,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>();
            let mut map = ReactionCounterMap::from(initial);
            let before = map.clone();
            map.toggle(&key(k));
            map.toggle(&key(k));
            assert_eq!(map, before);
        });
}

#[test]
fn zero_entries_elided() {
    bolero::check!()
        .with_type::<Vec<u8>>()
        .cloned()
        .for_each(|toggles| {
            let mut map = ReactionCounterMap::new();
            for k in toggles {
                map.toggle(&key(k));
                assert!(map.iter().all(|(_, c)| c.count > 0));
            }
            let from_host = ReactionCounterMap::from(BTreeMap::from([(
                key(0),
                ReactionCount {
                    count: 0,
                    has_user_reacted: false,
                },
            )]));
            assert!(from_host.is_empty());
        });
}

#[test]
fn poll_single_vote() {
    bolero::check!()
        .with_type::<(Vec<u8>, u8, u8)>()
        .cloned()
        .for_each(|(votes, a, b)| {
            if votes.len() < 2 {
                return;
            }
            let options = votes
                .iter()
                .enumerate()
                .map(|(i, v)| PollOption {
                    id: PollOptionId::new(format!("{i}")),
                    text: format!("option {i}"),
                    votes: u64::from(*v),
                })
                .collect::<Vec<_>>();
            let a = usize::from(a) % options.len();
            let b = usize::from(b) % options.len();
            let mut poll = PollEngine::from(Poll {
                question: String::from("?"),
                options: options.clone(),
                has_voted: false,
                user_vote: None,
                time_left: None,
            });
            assert!(poll.vote(&options[a].id));
            assert!(!poll.vote(&options[b].id));
            assert!(poll.has_voted());
            assert_eq!(poll.user_vote(), Some(&options[a].id));
            for (i, o) in poll.options().iter().enumerate() {
                let expected = options[i].votes + u64::from(i == a);
                assert_eq!(o.votes, expected);
            }
            let results = poll.results().unwrap();
            assert!(results.iter().all(|r| r.percentage <= 100));
        });
}

#[test]
fn pinned_first_stable() {
    bolero::check!()
        .with_type::<Vec<bool>>()
        .cloned()
        .for_each(|pins| {
            let list = CommentList::new(
                pins.iter()
                    .enumerate()
                    .map(|(i, p)| comment(i, *p))
                    .collect(),
            );
            let sorted = list.sorted();
            assert_eq!(sorted.len(), pins.len());
            let first_unpinned = sorted
                .iter()
                .position(|c| !c.is_pinned)
                .unwrap_or(sorted.len());
            assert!(sorted[first_unpinned..].iter().all(|c| !c.is_pinned));
            let order = |pinned: bool| {
                sorted
                    .iter()
                    .filter(|c| c.is_pinned == pinned)
                    .map(|c| c.id.0.parse::<usize>().unwrap())
                    .collect::<Vec<_>>()
            };
            for group in [order(true), order(false)] {
                assert!(group.windows(2).all(|w| w[0] < w[1]));
            }
        });
}
