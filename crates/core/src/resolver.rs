// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::free_text::{FreeTextArgs, resolve_free_text};
use crate::lookup::{CommandRegistry, LinkLookup};
use crate::structured::{StructuredArgs, StructuredInput, resolve_structured};
use osu_args_domain::GameMode;

/// Binds configuration and collaborators for resolving invocations.
///
/// Holds no state of its own; resolving the same input twice yields the
/// same descriptor as long as the collaborators answer the same way.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a ResolverConfig,
    links: &'a dyn LinkLookup,
    commands: &'a dyn CommandRegistry,
}

impl<'a> Resolver<'a> {
    /// Creates a new resolver.
    ///
    /// # Arguments
    ///
    /// * `config` - Site origin, mod acronyms and defaults
    /// * `links` - Platform user to linked player lookup
    /// * `commands` - Command name to registered id lookup
    #[must_use]
    pub const fn new(
        config: &'a ResolverConfig,
        links: &'a dyn LinkLookup,
        commands: &'a dyn CommandRegistry,
    ) -> Self {
        Self {
            config,
            links,
            commands,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// Returns the link lookup collaborator.
    #[must_use]
    pub const fn links(&self) -> &'a dyn LinkLookup {
        self.links
    }

    /// Renders how to invoke the link command: a clickable command mention
    /// when its id is registered, plain text otherwise.
    #[must_use]
    pub fn link_hint(&self) -> String {
        let name: &str = self.config.link_command();
        self.commands.command_id(name).map_or_else(
            || format!("`/{name}`"),
            |id| format!("</{name}:{id}>"),
        )
    }

    /// Resolves a structured (slash command) invocation.
    ///
    /// # Errors
    ///
    /// Returns an error only if the link lookup collaborator fails.
    pub fn structured(
        &self,
        invoker: &str,
        input: &StructuredInput,
    ) -> Result<StructuredArgs, ResolveError> {
        resolve_structured(self, invoker, input)
    }

    /// Resolves a free-text (prefix command) invocation.
    ///
    /// `mode` is the mode implied by the command itself, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only if the link lookup collaborator fails.
    pub fn free_text<S: AsRef<str>>(
        &self,
        invoker: &str,
        tokens: &[S],
        mode: Option<GameMode>,
    ) -> Result<FreeTextArgs, ResolveError> {
        resolve_free_text(self, invoker, tokens, mode)
    }
}
