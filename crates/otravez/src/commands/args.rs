//! Command parsing and argument binding.

use super::{CommandInfo, ParamDefault, ParamKind};
use std::collections::HashMap;
use thiserror::Error;

/// A prefixed command pulled out of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lowercased command name.
    pub name: String,
    pub tokens: Vec<String>,
}

/// Split `;team 254` into a lowercased name and whitespace-separated tokens.
/// Returns `None` when the text is not a command.
pub fn parse_invocation(prefix: &str, text: &str) -> Option<Invocation> {
    let rest = text.trim_start().strip_prefix(prefix)?;

    // "; team" is not a command
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split_whitespace();
    let name = parts.next()?.to_lowercase();
    Some(Invocation {
        name,
        tokens: parts.map(str::to_string).collect(),
    })
}

/// Argument binding failures, shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("{} is a required argument that is missing.", capitalize(.0))]
    Missing(&'static str),

    #[error("Converting to \"int\" failed for parameter \"{0}\".")]
    NotAnInteger(&'static str),

    #[error("{} must be a positive team number.", capitalize(.0))]
    NotPositive(&'static str),

    #[error("{} must be an event code like \"casj\".", capitalize(.0))]
    NotAnEventCode(&'static str),
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Team(u32),
    Year(i32),
    Text(String),
}

/// Arguments bound to a [`CommandInfo`]. Absent optional parameters have no entry.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: HashMap<&'static str, ArgValue>,
}

impl Args {
    /// Coerce `tokens` positionally onto `info.params`. Extra tokens are ignored.
    pub fn bind(info: &CommandInfo, tokens: &[String], current_year: i32) -> Result<Self, UsageError> {
        let mut values = HashMap::new();

        for (index, param) in info.params.iter().enumerate() {
            let value = match tokens.get(index) {
                Some(token) => coerce(param.name, param.kind, token)?,
                None => match param.default {
                    ParamDefault::Required => return Err(UsageError::Missing(param.name)),
                    ParamDefault::Optional => continue,
                    ParamDefault::CurrentYear => ArgValue::Year(current_year),
                },
            };
            values.insert(param.name, value);
        }

        Ok(Self { values })
    }

    pub fn team(&self, name: &str) -> Option<u32> {
        match self.values.get(name)? {
            ArgValue::Team(team) => Some(*team),
            _ => None,
        }
    }

    pub fn year(&self, name: &str) -> Option<i32> {
        match self.values.get(name)? {
            ArgValue::Year(year) => Some(*year),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            ArgValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Insert a value directly, skipping coercion.
    pub fn with(mut self, name: &'static str, value: ArgValue) -> Self {
        self.values.insert(name, value);
        self
    }
}

fn coerce(name: &'static str, kind: ParamKind, token: &str) -> Result<ArgValue, UsageError> {
    match kind {
        // event codes end up in request paths
        ParamKind::EventCode => {
            if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric()) {
                Ok(ArgValue::Text(token.to_string()))
            } else {
                Err(UsageError::NotAnEventCode(name))
            }
        }
        ParamKind::Year => token
            .parse()
            .map(ArgValue::Year)
            .map_err(|_| UsageError::NotAnInteger(name)),
        ParamKind::Team => {
            let number: i64 = token.parse().map_err(|_| UsageError::NotAnInteger(name))?;
            u32::try_from(number)
                .ok()
                .filter(|n| *n > 0)
                .map(ArgValue::Team)
                .ok_or(UsageError::NotPositive(name))
        }
    }
}
