use std::sync::Mutex;

use async_trait::async_trait;
use mailsweep::gmail_api::MailApi;

/// One recorded API call, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List {
        query: Option<String>,
        label_id: Option<String>,
        max_results: u32,
    },
    Trash(String),
    Delete(String),
}

/// Scripted Gmail stand-in: returns a fixed page of ids and records every
/// call. Optionally fails the Nth terminal (trash/delete) call.
pub struct FakeGmail {
    page: Vec<String>,
    fail_terminal_call: Option<usize>, // 1-based
    calls: Mutex<Vec<Call>>,
    terminal_calls_seen: Mutex<usize>,
}

impl FakeGmail {
    pub fn with_page(ids: &[&str]) -> Self {
        Self {
            page: ids.iter().map(|s| s.to_string()).collect(),
            fail_terminal_call: None,
            calls: Mutex::new(Vec::new()),
            terminal_calls_seen: Mutex::new(0),
        }
    }

    pub fn failing_on_terminal_call(mut self, nth: usize) -> Self {
        self.fail_terminal_call = Some(nth);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn terminal_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Trash(_) | Call::Delete(_)))
            .collect()
    }

    fn record_terminal(&self, call: Call) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.lock().unwrap().push(call);
        let mut seen = self.terminal_calls_seen.lock().unwrap();
        *seen += 1;
        if self.fail_terminal_call == Some(*seen) {
            return Err("quotaExceeded: user rate limit reached".into());
        }
        Ok(())
    }
}

#[async_trait]
impl MailApi for FakeGmail {
    async fn list_message_ids(
        &self,
        query: Option<String>,
        label_id: Option<String>,
        max_results: u32,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        self.calls.lock().unwrap().push(Call::List {
            query,
            label_id,
            max_results,
        });
        Ok(self.page.clone())
    }

    async fn trash_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.record_terminal(Call::Trash(id.to_string()))
    }

    async fn delete_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.record_terminal(Call::Delete(id.to_string()))
    }
}
