use crate::api::{self, PollOption, PollOptionId};

/// What a single option looks like once results may be shown
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PollResult {
    pub id: PollOptionId,
    pub text: String,
    pub votes: u64,
    pub percentage: u64,
    pub is_user_vote: bool,
}

/// Single-choice, one-time voting over a list of options
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PollEngine {
    pub question: String,
    pub time_left: Option<String>,
    options: Vec<PollOption>,
    has_voted: bool,
    user_vote: Option<PollOptionId>,
}

impl From<api::Poll> for PollEngine {
    fn from(p: api::Poll) -> PollEngine {
        PollEngine {
            question: p.question,
            time_left: p.time_left,
            options: p.options,
            has_voted: p.has_voted,
            user_vote: p.user_vote,
        }
    }
}

impl PollEngine {
    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub fn user_vote(&self) -> Option<&PollOptionId> {
        self.user_vote.as_ref()
    }

    /// Returns whether the vote was recorded.
    ///
    /// Voting is refused once a vote is recorded, and for ids that are
    /// not one of this poll's options.
    pub fn vote(&mut self, option: &PollOptionId) -> bool {
        if self.has_voted {
            tracing::debug!(?option, "ignoring vote on already-voted poll");
            return false;
        }
        let o = match self.options.iter_mut().find(|o| o.id == *option) {
            None => {
                tracing::warn!(?option, "vote for an option that is not in the poll");
                return false;
            }
            Some(o) => o,
        };
        o.votes = o.votes.saturating_add(1);
        self.has_voted = true;
        self.user_vote = Some(option.clone());
        true
    }

    pub fn total_votes(&self) -> u64 {
        self.options
            .iter()
            .fold(0, |acc: u64, o| acc.saturating_add(o.votes))
    }

    /// Rounded share of all votes, 0 when nobody voted yet
    pub fn percentage(&self, votes: u64) -> u64 {
        let total = self
            .options
            .iter()
            .map(|o| u128::from(o.votes))
            .sum::<u128>();
        if total == 0 {
            return 0;
        }
        // round half up, in integers
        let pct = (u128::from(votes) * 200 + total) / (total * 2);
        u64::try_from(pct).unwrap_or(100)
    }

    /// Per-option results, only available after the user voted
    pub fn results(&self) -> Option<Vec<PollResult>> {
        if !self.has_voted {
            return None;
        }
        Some(
            self.options
                .iter()
                .map(|o| PollResult {
                    id: o.id.clone(),
                    text: o.text.clone(),
                    votes: o.votes,
                    percentage: self.percentage(o.votes),
                    is_user_vote: self.user_vote.as_ref() == Some(&o.id),
                })
                .collect(),
        )
    }

    pub fn to_api(&self) -> api::Poll {
        api::Poll {
            question: self.question.clone(),
            options: self.options.clone(),
            has_voted: self.has_voted,
            user_vote: self.user_vote.clone(),
            time_left: self.time_left.clone(),
        }
    }
}
