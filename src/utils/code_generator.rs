//! Short code generation.
//!
//! Generators are pure: they know nothing about which codes are already taken.
//! Uniqueness is enforced by the retry loop in
//! [`crate::application::services::UrlRegistry::add`].

use rand::{Rng, distr::Alphanumeric};

/// Default number of characters in a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Path segments routed before `/{short_code}`; a code equal to one of these
/// could never redirect.
pub const RESERVED_CODES: &[&str] = &["api", "health", "static"];

/// Returns `true` if `code` collides with a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code. Successive calls are independent.
    fn generate(&self) -> String;
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Box<G> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

/// Draws codes uniformly at random from `[A-Za-z0-9]`.
///
/// With the default length of 6 there are 62^6 (about 5.68e10) possible codes.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Length of the codes this generator produces.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
