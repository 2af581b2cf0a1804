//! In-memory URL registry: code minting, duplicate detection, lookup and click counting.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator, is_reserved_code};
use crate::utils::url_validator::is_valid_url;

/// Default cap on code generation attempts per `add`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

#[derive(Debug, Default)]
struct RegistryState {
    /// Records keyed by short code.
    records: HashMap<String, UrlRecord>,
    /// Original URL to short code, kept in step with `records`.
    codes_by_url: HashMap<String, String>,
    /// Short codes in insertion order, for stable listings.
    order: Vec<String>,
}

/// Generator type used by the running service.
pub type DynCodeGenerator = Box<dyn CodeGenerator>;

/// Authority over every shortened URL in the process.
///
/// All state sits behind a single lock: `add`, `record_click` and `reset`
/// hold the write lock for their whole critical section, so the duplicate
/// check, code minting and both map inserts happen as one unit. Readers get
/// cloned snapshots.
pub struct UrlRegistry<G: CodeGenerator = DynCodeGenerator> {
    state: RwLock<RegistryState>,
    generator: G,
    max_attempts: usize,
}

impl UrlRegistry<DynCodeGenerator> {
    /// Creates an empty registry with the default generator and retry cap.
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomCodeGenerator::default()), DEFAULT_MAX_ATTEMPTS)
    }
}

impl Default for UrlRegistry<DynCodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> UrlRegistry<G> {
    /// Creates an empty registry drawing codes from `generator`.
    ///
    /// `max_attempts` bounds how many candidates `add` tries before giving up
    /// with [`RegistryError::CodeSpaceExhausted`]; it is clamped to at least 1.
    pub fn with_generator(generator: G, max_attempts: usize) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens `original_url`, or returns the record that already holds it.
    ///
    /// Duplicate detection is an exact string comparison: no case folding,
    /// trailing-slash or encoding normalisation. An existing record is
    /// returned untouched, click count included.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] if the URL fails validation
    /// - [`RegistryError::CodeSpaceExhausted`] if every candidate collided
    pub fn add(&self, original_url: &str) -> Result<UrlRecord, RegistryError> {
        if !is_valid_url(original_url) {
            return Err(RegistryError::InvalidUrl {
                url: original_url.to_string(),
            });
        }

        let mut state = self.state.write();

        if let Some(existing) = state
            .codes_by_url
            .get(original_url)
            .and_then(|code| state.records.get(code))
        {
            debug!(code = %existing.short_code, "URL already shortened");
            return Ok(existing.clone());
        }

        let short_code = self.mint_code(&state)?;
        let record = UrlRecord::new(original_url.to_string(), short_code.clone());

        state
            .codes_by_url
            .insert(original_url.to_string(), short_code.clone());
        state.order.push(short_code.clone());
        state.records.insert(short_code, record.clone());

        debug!(code = %record.short_code, url = %record.original_url, "Short link created");
        Ok(record)
    }

    /// Looks up a record without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for unknown codes.
    pub fn resolve(&self, short_code: &str) -> Result<UrlRecord, RegistryError> {
        self.state
            .read()
            .records
            .get(short_code)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                code: short_code.to_string(),
            })
    }

    /// Adds exactly one click to the record and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for unknown codes.
    pub fn record_click(&self, short_code: &str) -> Result<u64, RegistryError> {
        let mut state = self.state.write();
        let record = state
            .records
            .get_mut(short_code)
            .ok_or_else(|| RegistryError::NotFound {
                code: short_code.to_string(),
            })?;

        Ok(record.increment_click_count())
    }

    /// Snapshot of every live record, oldest first.
    pub fn list_all(&self) -> Vec<UrlRecord> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|code| state.records.get(code))
            .cloned()
            .collect()
    }

    /// Drops every record.
    pub fn reset(&self) {
        let mut state = self.state.write();
        let removed = state.records.len();
        *state = RegistryState::default();
        debug!(removed, "Registry reset");
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Returns `true` when the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws candidates until one is free. Caller must hold the write lock.
    ///
    /// Codes shadowed by fixed routes count as collisions.
    fn mint_code(&self, state: &RegistryState) -> Result<String, RegistryError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if is_reserved_code(&code) {
                debug!(attempt, code = %code, "Generated reserved code, retrying");
                continue;
            }

            if !state.records.contains_key(&code) {
                return Ok(code);
            }

            debug!(attempt, code = %code, "Short code collision, retrying");
        }

        Err(RegistryError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
