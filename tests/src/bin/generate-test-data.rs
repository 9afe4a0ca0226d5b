use std::collections::BTreeMap;

use agora_api::{
    Attendee, Author, Badge, Comment, CommentAuthor, CommentId, Content, Engagement,
    EngagementStyle, Event, EventHost, EventStatus, FeedEntry, FieldType, Form, FormField, Image,
    Link, Poll, PollOption, PollOptionId, Post, PostId, ReactionCount, ReactionKey, RsvpCounts,
    Time, Video,
};
use anyhow::Context;
use chrono::{Duration, Utc};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

const NUM_RANDOM_POSTS: usize = 10;

const MAX_ROOT_COMMENTS: usize = 6;
const MAX_COMMENT_DEPTH: usize = 3;
const MAX_REPLIES: usize = 3;
const COMMENT_WORD_COUNT: usize = 18;
const POST_WORD_COUNT: usize = 40;
const DESCRIPTION_WORD_COUNT: usize = 60;

const NAMES: &[&str] = &[
    "Ada Ng", "Bo Lindqvist", "Chidi Okafor", "Dana Ruiz", "Emeka Obi", "Farah Haddad",
    "Gus Moreau", "Hana Sato",
];
const CATEGORIES: &[&str] = &["Announcements", "Events", "Help", "Showcase", "Off-topic"];
const REACTIONS: &[&str] = &["love", "like", "fire", "laugh", "wow", "heart", "clap"];

fn avatar(name: &str) -> String {
    format!("/avatars/{}.png", name.to_lowercase().replace(' ', "-"))
}

fn gen_name(rng: &mut impl Rng) -> &'static str {
    NAMES.choose(rng).copied().unwrap_or("Anonymous")
}

fn gen_past_time(rng: &mut impl Rng, max_minutes: i64) -> Time {
    Utc::now() - Duration::minutes(rng.gen_range(0..max_minutes))
}

fn gen_author(rng: &mut impl Rng) -> Author {
    let name = gen_name(rng);
    Author {
        name: String::from(name),
        username: rng
            .gen_bool(0.7)
            .then(|| name.to_lowercase().replace(' ', "_")),
        avatar: avatar(name),
        category: CATEGORIES.choose(rng).map(|c| String::from(*c)),
        badge: rng.gen_bool(0.3).then(|| Badge {
            text: String::from("Moderator"),
            emoji: Some(String::from("🛡️")),
        }),
        emoji: None,
    }
}

fn gen_reactions(rng: &mut impl Rng) -> BTreeMap<ReactionKey, ReactionCount> {
    let mut res = BTreeMap::new();
    for k in REACTIONS {
        if rng.gen_bool(0.7) {
            continue;
        }
        let count = ReactionCount {
            count: rng.gen_range(1..20),
            has_user_reacted: rng.gen_bool(0.2),
        };
        res.insert(ReactionKey::new(*k), count);
    }
    res
}

fn gen_comments(rng: &mut impl Rng, prefix: &str, depth: usize, max: usize) -> Vec<Comment> {
    let n = rng.gen_range(0..=max);
    (0..n)
        .map(|i| {
            let id = match prefix.is_empty() {
                true => format!("{i}"),
                false => format!("{prefix}-{i}"),
            };
            let name = gen_name(rng);
            let children = match depth < MAX_COMMENT_DEPTH {
                true => gen_comments(rng, &id, depth + 1, MAX_REPLIES),
                false => Vec::new(),
            };
            Comment {
                id: CommentId::new(id),
                author: CommentAuthor {
                    name: String::from(name),
                    avatar: avatar(name),
                },
                content: lipsum::lipsum_words(rng.gen_range(3..COMMENT_WORD_COUNT)),
                posted_at: gen_past_time(rng, 60 * 24 * 7),
                reactions: gen_reactions(rng),
                // only top-level comments get pinned
                is_pinned: depth == 0 && rng.gen_bool(0.2),
                children,
            }
        })
        .collect()
}

fn gen_engagement(rng: &mut impl Rng, style: EngagementStyle) -> Engagement {
    let mut e = Engagement {
        likes: rng.gen_range(0..500),
        comments: rng.gen_range(0..50),
        shares: rng.gen_range(0..50),
        ..Engagement::default()
    };
    match style {
        EngagementStyle::Default => {
            e.is_liked = rng.gen_bool(0.3);
            e.is_bookmarked = rng.gen_bool(0.2);
        }
        EngagementStyle::Upvote => {
            e.upvotes = rng.gen_range(0..2_000);
            e.downvotes = rng.gen_range(0..100);
        }
        EngagementStyle::Reactions => {
            e.reactions = ["heart", "clap", "fire"]
                .iter()
                .map(|k| (ReactionKey::new(*k), rng.gen_range(0..40)))
                .filter(|(_, n)| *n > 0)
                .collect();
        }
        EngagementStyle::Event => {
            e.rsvp = RsvpCounts {
                yes: rng.gen_range(0..80),
                no: rng.gen_range(0..20),
                maybe: rng.gen_range(0..30),
            };
        }
    }
    e
}

fn gen_images(rng: &mut impl Rng, n: usize) -> Vec<Image> {
    (0..n)
        .map(|i| Image {
            src: format!("https://picsum.photos/seed/{}/800/600", rng.gen_range(0..10_000)),
            alt: format!("Photo {}", i + 1),
            aspect_ratio: None,
        })
        .collect()
}

fn gen_poll(rng: &mut impl Rng) -> Poll {
    let options = ["Saturday morning", "Saturday evening", "Sunday afternoon"]
        .iter()
        .enumerate()
        .map(|(i, text)| PollOption {
            id: PollOptionId::new(format!("option-{i}")),
            text: String::from(*text),
            votes: rng.gen_range(0..60),
        })
        .collect();
    Poll {
        question: String::from("When should we hold the next meetup?"),
        options,
        has_voted: false,
        user_vote: None,
        time_left: Some(format!("{} days", rng.gen_range(1..7))),
    }
}

fn gen_event(rng: &mut impl Rng) -> Event {
    let status = *[EventStatus::Upcoming, EventStatus::Ongoing, EventStatus::Completed]
        .choose(rng)
        .unwrap_or(&EventStatus::Upcoming);
    let host = gen_name(rng);
    Event {
        title: lipsum::lipsum_title(),
        starts_at: Utc::now() + Duration::hours(rng.gen_range(-48..24 * 14)),
        location: rng
            .gen_bool(0.6)
            .then(|| String::from("Community Center, Room 4")),
        is_online: rng.gen_bool(0.5),
        attendees: rng.gen_range(0..300),
        category: String::from("meetup"),
        status,
        host: Some(EventHost {
            name: String::from(host),
            avatar: avatar(host),
        }),
        image: Some(String::from("https://picsum.photos/seed/event/1200/400")),
        description: Some(lipsum::lipsum_words(DESCRIPTION_WORD_COUNT)),
        roster: NAMES
            .iter()
            .take(rng.gen_range(0..NAMES.len()))
            .map(|n| Attendee {
                name: String::from(*n),
                avatar: avatar(n),
            })
            .collect(),
    }
}

fn gen_form() -> Form {
    let field = |id: &str, label: &str, field_type, options: &[&str], required| FormField {
        id: String::from(id),
        label: String::from(label),
        field_type,
        options: options.iter().map(|o| String::from(*o)).collect(),
        placeholder: Some(format!("{label}...")),
        required,
    };
    Form {
        title: String::from("Volunteer sign-up"),
        description: lipsum::lipsum_words(20),
        fields: vec![
            field("name", "Your name", FieldType::Text, &[], true),
            field(
                "role",
                "Preferred role",
                FieldType::Select,
                &["Setup", "Welcome desk", "Cleanup"],
                true,
            ),
            field("shift", "Shift", FieldType::Radio, &["Morning", "Afternoon"], false),
            field("notes", "Anything else?", FieldType::Textarea, &[], false),
        ],
        submit_text: String::from("Sign up"),
        responses: 17,
    }
}

fn gen_video() -> Video {
    Video {
        embed_url: String::from("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        title: lipsum::lipsum_title(),
        description: lipsum::lipsum_words(DESCRIPTION_WORD_COUNT),
        platform: String::from("YouTube"),
        duration: String::from("3:33"),
    }
}

fn gen_link() -> Link {
    Link {
        url: Some(String::from("https://example.org/guide")),
        title: String::from("Community guidelines"),
        description: Some(lipsum::lipsum_words(DESCRIPTION_WORD_COUNT)),
        icon: None,
    }
}

fn gen_post(rng: &mut impl Rng, style: EngagementStyle, content: Content) -> FeedEntry {
    FeedEntry {
        post: Post {
            id: PostId(Uuid::new_v4()),
            author: gen_author(rng),
            posted_at: gen_past_time(rng, 60 * 24 * 30),
            content,
            engagement: gen_engagement(rng, style),
            engagement_style: style,
        },
        comments: gen_comments(rng, "", 0, MAX_ROOT_COMMENTS),
    }
}

fn text(rng: &mut impl Rng) -> Option<String> {
    Some(lipsum::lipsum_words(rng.gen_range(5..POST_WORD_COUNT)))
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let rng = &mut rng;

    // one post per content slot and engagement style first
    let mut feed = Vec::new();
    let content = Content {
        text: text(rng),
        images: gen_images(rng, 7),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Default, content));
    let content = Content {
        text: text(rng),
        poll: Some(gen_poll(rng)),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Upvote, content));
    let content = Content {
        text: text(rng),
        event: Some(gen_event(rng)),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Event, content));
    let content = Content {
        text: text(rng),
        form: Some(gen_form()),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Reactions, content));
    let content = Content {
        video: Some(gen_video()),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Default, content));
    let content = Content {
        text: text(rng),
        link: Some(gen_link()),
        images: gen_images(rng, 2),
        ..Content::default()
    };
    feed.push(gen_post(rng, EngagementStyle::Reactions, content));

    let styles = [
        EngagementStyle::Default,
        EngagementStyle::Reactions,
        EngagementStyle::Upvote,
    ];
    for _ in 0..NUM_RANDOM_POSTS {
        let style = *styles.choose(rng).unwrap_or(&EngagementStyle::Default);
        let content = Content {
            text: text(rng),
            poll: rng.gen_bool(0.2).then(|| gen_poll(rng)),
            link: rng.gen_bool(0.2).then(gen_link),
            images: {
                let n = rng.gen_range(0..6);
                gen_images(rng, n)
            },
            ..Content::default()
        };
        feed.push(gen_post(rng, style, content));
    }

    let out = std::io::stdout();
    serde_json::to_writer_pretty(out.lock(), &feed).context("writing the feed")?;
    println!();
    Ok(())
}
