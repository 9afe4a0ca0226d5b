use std::borrow::Cow;

use crate::{
    api::{Content, Event, Form, Image, Link, Poll, Video},
    Interaction, PresentationMode,
};

/// One rendered content block, in display order.
///
/// The poll payload is a type parameter so that a card can substitute its
/// live poll state for the initial poll data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Block<'a, P = &'a Poll> {
    Poll(P),
    Video(&'a Video),
    Form(&'a Form),
    Event(&'a Event),
    Link(&'a Link),
    Images(&'a [Image]),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BlockKind {
    Poll,
    Video,
    Form,
    Event,
    Link,
    Images,
}

impl<'a, P> Block<'a, P> {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Poll(_) => BlockKind::Poll,
            Block::Video(_) => BlockKind::Video,
            Block::Form(_) => BlockKind::Form,
            Block::Event(_) => BlockKind::Event,
            Block::Link(_) => BlockKind::Link,
            Block::Images(_) => BlockKind::Images,
        }
    }

    /// Swaps the poll payload, dropping the block if `f` returns `None`
    pub fn filter_map_poll<Q>(self, f: impl FnOnce(P) -> Option<Q>) -> Option<Block<'a, Q>> {
        Some(match self {
            Block::Poll(p) => Block::Poll(f(p)?),
            Block::Video(v) => Block::Video(v),
            Block::Form(v) => Block::Form(v),
            Block::Event(v) => Block::Event(v),
            Block::Link(v) => Block::Link(v),
            Block::Images(v) => Block::Images(v),
        })
    }
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Poll => "poll",
            BlockKind::Video => "video",
            BlockKind::Form => "form",
            BlockKind::Event => "event",
            BlockKind::Link => "link",
            BlockKind::Images => "images",
        }
    }

    /// Whether the feed renders this block differently from the modal.
    /// Videos and images look the same everywhere.
    pub fn has_preview_variant(&self) -> bool {
        match self {
            BlockKind::Poll | BlockKind::Form | BlockKind::Event | BlockKind::Link => true,
            BlockKind::Video | BlockKind::Images => false,
        }
    }
}

pub trait ContentExt {
    /// Blocks for every populated slot, in the fixed order
    /// poll, video, form, event, link, images. Text is not a block.
    fn blocks(&self) -> Vec<Block<'_>>;
}

impl ContentExt for Content {
    fn blocks(&self) -> Vec<Block<'_>> {
        // Destructure so that a new slot cannot be forgotten here
        let Content {
            text: _,
            poll,
            video,
            form,
            event,
            link,
            images,
        } = self;
        let mut res = Vec::with_capacity(6);
        if let Some(p) = poll {
            res.push(Block::Poll(p));
        }
        if let Some(v) = video {
            res.push(Block::Video(v));
        }
        if let Some(f) = form {
            res.push(Block::Form(f));
        }
        if let Some(e) = event {
            res.push(Block::Event(e));
        }
        if let Some(l) = link {
            res.push(Block::Link(l));
        }
        if !images.is_empty() {
            res.push(Block::Images(images));
        }
        res
    }
}

/// Arrangement of an image block, a pure function of the image count
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageLayout {
    /// One full-bleed image
    Single,
    /// Two images next to each other
    SideBySide,
    /// One large image, two stacked on its side
    LargeAndStacked,
    /// 2x2 grid
    Grid,
    /// Four tiles plus a fifth one, badged "+hidden" when hidden > 0
    Mosaic { hidden: usize },
}

impl ImageLayout {
    pub fn for_count(n: usize) -> Option<ImageLayout> {
        match n {
            0 => None,
            1 => Some(ImageLayout::Single),
            2 => Some(ImageLayout::SideBySide),
            3 => Some(ImageLayout::LargeAndStacked),
            4 => Some(ImageLayout::Grid),
            n => Some(ImageLayout::Mosaic { hidden: n - 5 }),
        }
    }

    /// Number of images actually drawn
    pub fn visible(&self) -> usize {
        match self {
            ImageLayout::Single => 1,
            ImageLayout::SideBySide => 2,
            ImageLayout::LargeAndStacked => 3,
            ImageLayout::Grid => 4,
            ImageLayout::Mosaic { .. } => 5,
        }
    }

    pub fn badge(&self) -> Option<String> {
        match self {
            ImageLayout::Mosaic { hidden } if *hidden > 0 => Some(format!("+{hidden}")),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventLayout {
    /// Summary card of the feed
    Collapsed,
    /// Summary card inside the modal, can be expanded
    ModalCollapsed,
    /// Full details: description, host, roster, map
    Expanded,
}

impl EventLayout {
    pub fn new(mode: PresentationMode, expanded: bool) -> EventLayout {
        if mode.is_preview {
            return EventLayout::Collapsed;
        }
        match mode.is_in_modal && expanded {
            true => EventLayout::Expanded,
            false => EventLayout::ModalCollapsed,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormLayout {
    /// Question count and call to action
    Summary,
    /// Every field, plus the submit button
    Full,
}

impl FormLayout {
    pub fn new(mode: PresentationMode, opened: bool) -> FormLayout {
        match !mode.is_preview && mode.is_in_modal && opened {
            true => FormLayout::Full,
            false => FormLayout::Summary,
        }
    }

    /// What the summary's call to action does: the feed sends the user to
    /// the modal, where the form can then be opened
    pub fn call_to_action(mode: PresentationMode) -> Interaction {
        match mode.is_in_modal {
            true => Interaction::ToggleFormOpen,
            false => Interaction::OpenModal,
        }
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with an
/// ellipsis
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((end, _)) => Cow::Owned(format!("{}…", text[..end].trim_end())),
    }
}
