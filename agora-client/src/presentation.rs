/// How complete a rendering should be.
///
/// Passed read-only to every block and to the engagement bar. The feed
/// card and the detail modal render the same state with different modes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PresentationMode {
    /// Condensed feed card: summaries only, no poll voting
    pub is_preview: bool,
    /// Inside the detail modal
    pub is_in_modal: bool,
}

impl PresentationMode {
    pub fn feed() -> PresentationMode {
        PresentationMode {
            is_preview: true,
            is_in_modal: false,
        }
    }

    pub fn modal() -> PresentationMode {
        PresentationMode {
            is_preview: false,
            is_in_modal: true,
        }
    }

    /// Whether votes and form inputs are accepted in this mode
    pub fn is_interactive(&self) -> bool {
        !self.is_preview
    }
}
