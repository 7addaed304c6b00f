//! Page navigation and chat state for one app session.
//!
//! Mirrors what the user sees: the current page, the auth tab, the
//! "Logged in as" label, the assistant transcript and the summary cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use robodoc_core::UserIdentity;

use crate::analysis::AnalysisReport;
use crate::card::MedicineCard;

/// App pages, in the order a user normally visits them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Page {
    Auth,
    Input,
    Analysis,
    Summary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One chat bubble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// UI state for a single session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Session identifier
    pub id: Uuid,
    pub page: Page,
    pub auth_tab: AuthTab,
    /// "Logged in as ..." header, once logged in
    pub user_label: Option<String>,
    /// Truncated symptom text shown above the results
    pub summary_condition: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub cards: Vec<MedicineCard>,
    /// Whether the "no results" notice is visible
    pub no_results: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Start on the auth page with the login tab selected.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            page: Page::Auth,
            auth_tab: AuthTab::Login,
            user_label: None,
            summary_condition: None,
            messages: Vec::new(),
            cards: Vec::new(),
            no_results: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn show_auth_tab(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
        self.touch();
    }

    /// After a successful sign-up the user is sent to the login tab.
    pub fn on_signed_up(&mut self) {
        self.show_auth_tab(AuthTab::Login);
    }

    pub fn on_logged_in(&mut self, identity: &UserIdentity) {
        self.user_label = Some(identity.label());
        self.page = Page::Input;
        self.touch();
    }

    /// Refresh the header after an email change.
    pub fn on_credentials_changed(&mut self, identity: &UserIdentity) {
        self.user_label = Some(identity.label());
        self.touch();
    }

    /// Show the loading page while the analysis delay runs.
    pub fn begin_analysis(&mut self) {
        self.page = Page::Analysis;
        self.touch();
    }

    /// Replace the transcript and cards with a finished report.
    pub fn show_report(&mut self, report: &AnalysisReport) {
        self.clear_results();
        self.summary_condition = Some(report.summary_condition.clone());
        for text in &report.messages {
            self.add_message(Speaker::Assistant, text.clone());
        }
        self.cards = report.cards.clone();
        self.no_results = report.no_results;
        self.page = Page::Summary;
        self.touch();
    }

    /// "Back" from the summary: clear results and return to the input page.
    pub fn go_back(&mut self) {
        self.clear_results();
        self.page = Page::Input;
        self.touch();
    }

    pub fn add_message(&mut self, speaker: Speaker, text: String) {
        self.messages.push(ChatMessage { speaker, text });
        self.touch();
    }

    fn clear_results(&mut self) {
        self.summary_condition = None;
        self.messages.clear();
        self.cards.clear();
        self.no_results = false;
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
