use std::path::{Path, PathBuf};

use agora_client::{
    api::{FeedEntry, Notification},
    truncate, Block, CardConfig, ImageLayout, Interaction, PollEngine, PresentationMode,
    SocialCard,
};
use anyhow::Context;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Card configuration, as JSON
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Print the content blocks of a post, in display order
    Blocks {
        /// JSON file holding a feed entry, or a whole feed
        #[structopt(parse(from_os_str))]
        post: PathBuf,

        /// Entry to pick when the file holds a whole feed
        #[structopt(short, long, default_value = "0")]
        index: usize,

        /// Lay the blocks out as in the detail modal
        #[structopt(long)]
        modal: bool,
    },

    /// Apply interactions to a post, then print the notifications and the
    /// resulting state
    Replay {
        /// JSON file holding a feed entry, or a whole feed
        #[structopt(parse(from_os_str))]
        post: PathBuf,

        /// Entry to pick when the file holds a whole feed
        #[structopt(short, long, default_value = "0")]
        index: usize,

        /// Interactions, eg. `like`, `rsvp:yes`, `open`, `vote:<option>` or
        /// `comment-react:<comment>:<reaction>`
        interactions: Vec<Interaction>,
    },
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Input {
    Entry(FeedEntry),
    Feed(Vec<FeedEntry>),
}

fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data = std::fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {path:?}"))
}

fn load_entry(path: &Path, index: usize) -> anyhow::Result<FeedEntry> {
    tracing::debug!(?path, index, "loading post");
    match read_json(path)? {
        Input::Entry(e) => Ok(e),
        Input::Feed(mut feed) => {
            anyhow::ensure!(
                index < feed.len(),
                "feed {path:?} has {} entries, no entry {index}",
                feed.len()
            );
            Ok(feed.swap_remove(index))
        }
    }
}

/// One-line summary of a block, as it would be laid out in `mode`
fn describe(
    card: &SocialCard,
    block: &Block<'_, &PollEngine>,
    mode: PresentationMode,
    cfg: &CardConfig,
) -> String {
    match block {
        Block::Poll(p) => match p.results() {
            None => format!(
                "{} ({} options, {} votes)",
                p.question,
                p.options().len(),
                p.total_votes()
            ),
            Some(res) => {
                let res = res
                    .iter()
                    .map(|r| {
                        let mark = if r.is_user_vote { "*" } else { "" };
                        format!("{}{mark} {}%", r.text, r.percentage)
                    })
                    .collect::<Vec<_>>();
                format!("{} [{}]", p.question, res.join(", "))
            }
        },
        Block::Video(v) => format!("{} ({}, {})", v.title, v.platform, v.duration),
        Block::Form(f) => format!(
            "{} ({} fields, {:?})",
            f.title,
            f.fields.len(),
            card.form_layout(mode)
        ),
        Block::Event(e) => format!(
            "{} at {} ({:?}, {:?})",
            e.title,
            e.starts_at.to_rfc3339(),
            e.status,
            card.event_layout(mode)
        ),
        Block::Link(l) => match &l.description {
            Some(d) if mode.is_preview => {
                format!("{}: {}", l.title, truncate(d, cfg.preview_description_chars))
            }
            Some(d) => format!("{}: {d}", l.title),
            None => l.title.clone(),
        },
        Block::Images(imgs) => match ImageLayout::for_count(imgs.len()) {
            None => String::from("no image"),
            Some(l) => format!(
                "{} images, {:?}{}",
                imgs.len(),
                l,
                l.badge().map(|b| format!(" {b}")).unwrap_or_default()
            ),
        },
    }
}

fn print_notification(n: &Notification) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(n).context("serializing notification")?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }

    let opt = <Opt as structopt::StructOpt>::from_args();

    let cfg = match &opt.config {
        None => CardConfig::default(),
        Some(path) => read_json(path).context("loading card configuration")?,
    };

    match opt.cmd {
        Command::Blocks { post, index, modal } => {
            let card = SocialCard::new(load_entry(&post, index)?);
            let mode = match modal {
                true => PresentationMode::modal(),
                false => PresentationMode::feed(),
            };
            if let Some(text) = card.text() {
                println!("text\t{text}");
            }
            for b in card.blocks() {
                println!("{}\t{}", b.kind().as_str(), describe(&card, &b, mode, &cfg));
            }
            println!("actions\t{:?}", card.engagement().primary_actions(&cfg));
        }
        Command::Replay {
            post,
            index,
            interactions,
        } => {
            let mut card = SocialCard::new(load_entry(&post, index)?);
            for i in interactions {
                let mode = card.current_mode();
                if let Some(n) = card.apply(i, mode) {
                    print_notification(&n)?;
                }
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&card.snapshot()).context("serializing post state")?
            );
        }
    }

    Ok(())
}
