//! JSON-lines front end over [`UserRegistrationService`].
//!
//! Every non-blank input line yields exactly one output line. A line that is
//! not a valid request is answered with a `malformed` response and the run
//! continues.

use crate::modules::users::service::UserRegistrationService;
use crate::modules::users::use_cases::register_user::decision::RegistrationError;
use crate::shared::infrastructure::user_store::UserStore;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Missing and `null` fields are read as empty strings, which the field
/// rules then reject as required.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Register {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
    IsRegistered {
        #[serde(default)]
        username: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Registered {
        username: String,
        message: String,
    },
    Rejected {
        kind: &'static str,
        reason: String,
    },
    Lookup {
        username: String,
        registered: bool,
    },
    Malformed {
        reason: String,
    },
}

impl From<RegistrationError> for Response {
    fn from(error: RegistrationError) -> Self {
        Self::Rejected {
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub registered: usize,
    pub rejected: usize,
    pub malformed: usize,
}

impl RunSummary {
    fn record(&mut self, response: &Response) {
        self.processed += 1;
        match response {
            Response::Registered { .. } => self.registered += 1,
            Response::Rejected { .. } => self.rejected += 1,
            Response::Malformed { .. } => self.malformed += 1,
            Response::Lookup { .. } => {}
        }
    }
}

pub fn handle_request<TStore>(service: &UserRegistrationService<TStore>, request: Request) -> Response
where
    TStore: UserStore + 'static,
{
    match request {
        Request::Register {
            username,
            password,
            email,
        } => {
            let result = service.register(
                username.as_deref().unwrap_or_default(),
                password.as_deref().unwrap_or_default(),
                email.as_deref().unwrap_or_default(),
            );
            match result {
                Ok(outcome) => Response::Registered {
                    username: outcome.username,
                    message: outcome.message,
                },
                Err(error) => error.into(),
            }
        }
        Request::IsRegistered { username } => {
            let username = username.unwrap_or_default();
            Response::Lookup {
                registered: service.is_registered(&username),
                username,
            }
        }
    }
}

/// `None` for blank lines.
pub fn handle_line<TStore>(service: &UserRegistrationService<TStore>, line: &str) -> Option<Response>
where
    TStore: UserStore + 'static,
{
    if line.trim().is_empty() {
        return None;
    }
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(service, request),
        Err(error) => {
            tracing::warn!(%error, "skipping malformed request");
            Response::Malformed {
                reason: error.to_string(),
            }
        }
    };
    Some(response)
}

pub fn run<TStore, R, W>(
    service: &UserRegistrationService<TStore>,
    input: R,
    mut output: W,
) -> anyhow::Result<RunSummary>
where
    TStore: UserStore + 'static,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read request line {}", index + 1))?;
        let Some(response) = handle_line(service, &line) else {
            continue;
        };
        summary.record(&response);
        serde_json::to_writer(&mut output, &response)
            .with_context(|| format!("failed to write response for line {}", index + 1))?;
        writeln!(output).context("failed to write response separator")?;
    }
    output.flush().context("failed to flush responses")?;
    Ok(summary)
}
