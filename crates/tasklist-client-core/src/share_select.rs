//! State for the share dialog's username search and multi-select control.
//!
//! The control is headless: the UI layer feeds it text changes, key presses
//! and the current time, issues the lookup requests it asks for, and reads
//! back what to draw. Keeping UI types out lets the debounce and selection
//! rules be exercised directly in tests with synthetic clocks.

use futures::channel::oneshot;
use tasklist_shared::{
    const_config::client::SEARCH_DEBOUNCE, id::UserId, req_args::api::task_list::ShareReqArgs,
    share::SharePermission,
};
use tasklist_time::{Millis, Timestamp};

use crate::{client::UiCallBack, Client};

/// A user discovered via lookup, eligible for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The text that was searched to find this user
    pub label: String,
    pub value: UserId,
}

/// What the lookups that have come back so far say about the current input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchValidity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

#[derive(Debug)]
struct PendingLookup {
    /// Input text the request was issued for (becomes the candidate label)
    text: String,
    rx: oneshot::Receiver<anyhow::Result<Option<UserId>>>,
}

/// Search-as-you-type user selection with a debounced lookup.
///
/// A keystroke restarts the debounce deadline; the lookup only goes out after
/// [`SEARCH_DEBOUNCE`] without further changes. Responses are applied in the
/// order they arrive, including responses for text that has since changed
/// (matching the behavior of the API's other clients, which have no stale
/// guard either).
#[derive(Debug, Default)]
pub struct ShareSelect {
    input: String,
    validity: SearchValidity,
    /// Everyone the lookups found this dialog lifetime, unique by id
    pool: Vec<Candidate>,
    /// Current selection, in selection order, unique by id
    selected: Vec<Candidate>,
    permission: SharePermission,
    /// Debounce deadline; replaced on every keystroke, dropped when the input
    /// empties
    deadline: Option<Timestamp>,
    /// Requests already sent, polled in issue order
    in_flight: Vec<PendingLookup>,
}

impl ShareSelect {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn validity(&self) -> SearchValidity {
        self.validity
    }

    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    pub fn selected(&self) -> &[Candidate] {
        &self.selected
    }

    pub fn permission(&self) -> SharePermission {
        self.permission
    }

    pub fn set_permission(&mut self, permission: SharePermission) {
        self.permission = permission;
    }

    /// Records a text change. Any change resets validity to unknown; emptying
    /// the input drops the pending deadline, any other change restarts it.
    pub fn set_input(&mut self, text: impl Into<String>, now: Timestamp) {
        let text = text.into();
        if text == self.input {
            return;
        }
        self.input = text;
        self.validity = SearchValidity::Unknown;
        self.deadline = if self.input.is_empty() {
            None
        } else {
            Some(now + SEARCH_DEBOUNCE)
        };
    }

    /// Returns the text to look up once the debounce deadline has passed.
    ///
    /// The caller issues the request and reports it back via
    /// [`Self::lookup_started`] (or uses [`Self::process`] which does both).
    pub fn take_due_lookup(&mut self, now: Timestamp) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        debug_assert!(
            !self.input.is_empty(),
            "deadline should have been dropped when the input emptied"
        );
        Some(self.input.clone())
    }

    /// Time left until the pending deadline, for scheduling the next UI tick
    pub fn time_to_deadline(&self, now: Timestamp) -> Option<Millis> {
        let deadline = self.deadline?;
        Some(deadline.millis_since(now).unwrap_or(Millis::new(0)))
    }

    pub fn lookup_started(
        &mut self,
        text: String,
        rx: oneshot::Receiver<anyhow::Result<Option<UserId>>>,
    ) {
        self.in_flight.push(PendingLookup { text, rx });
    }

    /// Applies every lookup response that has arrived, in issue order
    pub fn poll_lookups(&mut self) {
        let mut i = 0;
        while i < self.in_flight.len() {
            match self.in_flight[i].rx.try_recv() {
                Ok(None) => i += 1, // Still waiting on this one
                Ok(Some(outcome)) => {
                    let lookup = self.in_flight.remove(i);
                    self.apply_lookup_outcome(lookup.text, outcome);
                }
                Err(oneshot::Canceled) => {
                    // Sender dropped without answering, same as a failed request
                    tracing::warn!("username lookup dropped without a response");
                    self.in_flight.remove(i);
                    self.validity = SearchValidity::Invalid;
                }
            }
        }
    }

    fn apply_lookup_outcome(&mut self, text: String, outcome: anyhow::Result<Option<UserId>>) {
        match outcome {
            // Only a non-blank id counts as a match, a blank one reads the
            // same as no id at all
            Ok(Some(id)) if !id.as_ref().is_empty() => {
                self.validity = SearchValidity::Valid;
                if !self.pool.iter().any(|candidate| candidate.value == id) {
                    self.pool.push(Candidate {
                        label: text,
                        value: id,
                    });
                }
            }
            Ok(_) => self.validity = SearchValidity::Invalid,
            Err(err) => {
                tracing::warn!(?err, "username lookup failed");
                self.validity = SearchValidity::Invalid;
            }
        }
    }

    /// Handles Enter in the search field. Returns true when a candidate was
    /// selected so the UI can clear its text buffer to match.
    pub fn enter_pressed(&mut self) -> bool {
        if self.validity != SearchValidity::Valid {
            return false;
        }
        let Some(candidate) = self.pool.iter().find(|candidate| {
            candidate.label == self.input
                && !self
                    .selected
                    .iter()
                    .any(|selected| selected.value == candidate.value)
        }) else {
            return false;
        };
        self.selected.push(candidate.clone());
        self.input.clear();
        self.validity = SearchValidity::Unknown;
        self.deadline = None;
        true
    }

    /// Replaces the selection with what the chip picker reports, verbatim
    pub fn replace_selection(&mut self, new_selection: Vec<Candidate>) {
        self.selected = new_selection;
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The ids to submit, in selection order, with the chosen permission.
    /// None whenever submission is disabled.
    pub fn submission(&self) -> Option<ShareReqArgs> {
        if self.selected.is_empty() {
            return None;
        }
        Some(ShareReqArgs {
            users: self
                .selected
                .iter()
                .map(|candidate| candidate.value.clone())
                .collect(),
            permission: self.permission,
        })
    }

    /// Per-frame driver: issues the lookup once it is due and applies any
    /// responses that have arrived
    pub fn process(&mut self, now: Timestamp, client: &Client, ui_notify: impl UiCallBack) {
        if let Some(text) = self.take_due_lookup(now) {
            let rx = client.check_username(&text, ui_notify);
            self.lookup_started(text, rx);
        }
        self.poll_lookups();
    }
}
