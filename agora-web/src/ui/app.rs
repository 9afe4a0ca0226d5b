use std::rc::Rc;

use agora_client::{
    api::{CommentAuthor, FeedEntry, Notification, PostId},
    CardConfig,
};
use yew::prelude::*;

use crate::{api, ui};

pub enum AppMsg {
    Reload,
    ReceivedFeed(Vec<FeedEntry>),
    FetchFailed(String),
    Notified(PostId, Notification),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded,
    Failed(String),
}

pub struct App {
    feed: Vec<FeedEntry>,
    state: FeedState,
    config: Rc<CardConfig>,
    viewer: CommentAuthor,
}

impl App {
    fn fetch_feed(&self, ctx: &Context<Self>) {
        let url = api::feed_url();
        ctx.link().send_future(async move {
            match api::fetch_feed(url).await {
                Ok(feed) => AppMsg::ReceivedFeed(feed),
                Err(e) => {
                    tracing::error!("failed to load feed: {e:#}");
                    AppMsg::FetchFailed(format!("{e:#}"))
                }
            }
        });
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let this = App {
            feed: Vec::new(),
            state: FeedState::Loading,
            config: Rc::new(api::card_config()),
            viewer: CommentAuthor {
                name: String::from("You"),
                avatar: String::from("/avatars/you.png"),
            },
        };
        this.fetch_feed(ctx);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Reload => {
                self.state = FeedState::Loading;
                self.fetch_feed(ctx);
            }
            AppMsg::ReceivedFeed(feed) => {
                tracing::debug!(posts = feed.len(), "received feed");
                self.feed = feed;
                self.state = FeedState::Loaded;
            }
            AppMsg::FetchFailed(e) => {
                self.state = FeedState::Failed(e);
            }
            AppMsg::Notified(post, n) => {
                // the demo has no backend, notifications are only logged
                tracing::info!(?post, notification = ?n, "card notification");
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_notify = ctx
            .link()
            .callback(|(post, n)| AppMsg::Notified(post, n));
        html! {
            <div class="container feed py-3">
                <ui::FeedBanner
                    state={ self.state.clone() }
                    on_retry={ ctx.link().callback(|_| AppMsg::Reload) }
                />
                { for self.feed.iter().map(|entry| html! {
                    <ui::SocialCardView
                        key={ entry.post.id.0.to_string() }
                        entry={ entry.clone() }
                        config={ self.config.clone() }
                        viewer={ self.viewer.clone() }
                        on_notify={ on_notify.clone() }
                    />
                }) }
            </div>
        }
    }
}
