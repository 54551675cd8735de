//! Name and alias lookup for command handlers.

use super::{CommandHandler, CommandInfo};
use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Static mapping from command names and aliases to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: Vec<Arc<dyn CommandHandler>>,
    by_name: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its name and aliases. Fails if any of
    /// them is already taken.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> AppResult<()> {
        let info = handler.info();
        let names: Vec<String> = std::iter::once(info.name)
            .chain(info.aliases.iter().copied())
            .map(str::to_lowercase)
            .collect();

        if let Some(taken) = names.iter().find(|n| self.by_name.contains_key(*n)) {
            return Err(AppError::DuplicateCommand(taken.clone()));
        }

        let index = self.handlers.len();
        self.handlers.push(handler);
        for name in names {
            self.by_name.insert(name, index);
        }
        Ok(())
    }

    /// Look up by name or alias, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| Arc::clone(&self.handlers[index]))
    }

    /// Command info in registration order.
    pub fn infos(&self) -> Vec<&'static CommandInfo> {
        self.handlers.iter().map(|h| h.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
