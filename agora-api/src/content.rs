use crate::Time;

/// Independent capability slots of a post.
///
/// Any combination of slots may be populated. `images` being empty means
/// there is no image slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Content {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub poll: Option<Poll>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub form: Option<Form>,
    #[serde(default)]
    pub event: Option<Event>,
    #[serde(default)]
    pub link: Option<Link>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PollOptionId(pub String);

impl PollOptionId {
    pub fn new(id: impl Into<String>) -> PollOptionId {
        PollOptionId(id.into())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PollOption {
    pub id: PollOptionId,
    pub text: String,
    #[serde(default)]
    pub votes: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Poll {
    pub question: String,
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub user_vote: Option<PollOptionId>,
    /// Free-form remaining time, eg. "2 days"
    #[serde(default)]
    pub time_left: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EventHost {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Attendee {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Event {
    pub title: String,
    pub starts_at: Time,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub attendees: u64,
    pub category: String,
    pub status: EventStatus,
    #[serde(default)]
    pub host: Option<EventHost>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roster: Vec<Attendee>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Radio,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    /// Choices, only meaningful for `Select` and `Radio`
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Form {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub submit_text: String,
    #[serde(default)]
    pub responses: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Video {
    pub embed_url: String,
    pub title: String,
    pub description: String,
    pub platform: String,
    pub duration: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Link {
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon image url
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatio {
    Square,
    Landscape,
    Portrait,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
}
