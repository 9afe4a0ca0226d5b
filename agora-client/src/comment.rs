use crate::{
    api::{self, CommentAuthor, CommentId, Notification, ReactionKey, Time},
    ReactionCounterMap, ReactionToggle,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub id: CommentId,
    pub author: CommentAuthor,
    pub content: String,
    pub posted_at: Time,
    pub reactions: ReactionCounterMap,
    pub is_pinned: bool,

    /// Replies, in display order
    pub children: Vec<CommentNode>,
}

impl From<api::Comment> for CommentNode {
    fn from(c: api::Comment) -> CommentNode {
        CommentNode {
            id: c.id,
            author: c.author,
            content: c.content,
            posted_at: c.posted_at,
            reactions: ReactionCounterMap::from(c.reactions),
            is_pinned: c.is_pinned,
            children: c.children.into_iter().map(CommentNode::from).collect(),
        }
    }
}

impl CommentNode {
    pub fn find_in<'a>(nodes: &'a mut [CommentNode], id: &CommentId) -> Option<&'a mut CommentNode> {
        for c in nodes.iter_mut() {
            if c.id == *id {
                return Some(c);
            }
            if let Some(res) = CommentNode::find_in(&mut c.children, id) {
                return Some(res);
            }
        }
        None
    }

    pub fn contains(nodes: &[CommentNode], id: &CommentId) -> bool {
        nodes
            .iter()
            .any(|c| c.id == *id || CommentNode::contains(&c.children, id))
    }

    /// This comment and all its replies, at any depth
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|c| c.count()).sum::<usize>()
    }

    pub fn to_api(&self) -> api::Comment {
        api::Comment {
            id: self.id.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            posted_at: self.posted_at,
            reactions: self.reactions.clone().into_inner(),
            is_pinned: self.is_pinned,
            children: self.children.iter().map(|c| c.to_api()).collect(),
        }
    }
}

/// The comment thread of one post.
///
/// Besides the tree, it holds the id of the comment whose reaction picker
/// is open (there is at most one per list) and the text being typed as a
/// new comment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentList {
    roots: Vec<CommentNode>,
    active_picker: Option<CommentId>,
    draft: String,
}

impl CommentList {
    pub fn new(comments: Vec<api::Comment>) -> CommentList {
        CommentList {
            roots: comments.into_iter().map(CommentNode::from).collect(),
            active_picker: None,
            draft: String::new(),
        }
    }

    pub fn roots(&self) -> &[CommentNode] {
        &self.roots
    }

    /// Top-level comments as displayed: pinned ones first, each group in
    /// its input order
    pub fn sorted(&self) -> Vec<&CommentNode> {
        let (mut pinned, others): (Vec<_>, Vec<_>) = self.roots.iter().partition(|c| c.is_pinned);
        pinned.extend(others);
        pinned
    }

    pub fn total(&self) -> usize {
        self.roots.iter().map(|c| c.count()).sum()
    }

    pub fn find(&self, id: &CommentId) -> Option<&CommentNode> {
        fn find_in<'a>(nodes: &'a [CommentNode], id: &CommentId) -> Option<&'a CommentNode> {
            nodes
                .iter()
                .find_map(|c| (c.id == *id).then_some(c).or_else(|| find_in(&c.children, id)))
        }
        find_in(&self.roots, id)
    }

    /// Toggles the user's `key` reaction on comment `id`, wherever it is in
    /// the tree. Also closes that comment's picker if it was open.
    pub fn toggle_reaction(&mut self, id: &CommentId, key: &ReactionKey) -> Option<ReactionToggle> {
        let node = match CommentNode::find_in(&mut self.roots, id) {
            None => {
                tracing::warn!(?id, "reaction toggled on comment not in list");
                return None;
            }
            Some(node) => node,
        };
        let res = node.reactions.toggle(key);
        tracing::debug!(?id, %key, ?res, "toggled comment reaction");
        if self.active_picker.as_ref() == Some(id) {
            self.active_picker = None;
        }
        Some(res)
    }

    pub fn active_picker(&self) -> Option<&CommentId> {
        self.active_picker.as_ref()
    }

    /// Opens the picker of `id`, closing any other one
    pub fn open_picker(&mut self, id: &CommentId) {
        if !CommentNode::contains(&self.roots, id) {
            tracing::warn!(?id, "reaction picker requested for comment not in list");
            return;
        }
        self.active_picker = Some(id.clone());
    }

    pub fn toggle_picker(&mut self, id: &CommentId) {
        match self.active_picker.as_ref() == Some(id) {
            true => self.active_picker = None,
            false => self.open_picker(id),
        }
    }

    /// Closes whichever picker is open
    pub fn dismiss_picker(&mut self) {
        self.active_picker = None;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Hands the trimmed draft to the host and clears it. Blank drafts are
    /// kept as they are and nothing is sent.
    ///
    /// The new comment is not added to the tree here, see `push_root`.
    pub fn submit_draft(&mut self) -> Option<Notification> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = String::from(text);
        self.draft.clear();
        Some(Notification::AddComment(text))
    }

    /// Appends a comment at the end of the top level
    pub fn push_root(&mut self, comment: api::Comment) {
        self.roots.push(CommentNode::from(comment));
    }

    pub fn to_api(&self) -> Vec<api::Comment> {
        self.roots.iter().map(|c| c.to_api()).collect()
    }
}
