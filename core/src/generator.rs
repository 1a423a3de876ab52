//! # Alias Generator
//!
//! Derives Gmail aliases from a validated base address.
//!
//! Gmail ignores dots in the local part and everything after a `+`, so every
//! alias produced here still delivers to the base inbox:
//! * **plus**: `jane+news@gmail.com`, one alias per request.
//! * **dot**: `j.an.e@gmail.com`, randomized dot placement.
//! * **random**: `jane+k3x9qa@gmail.com`, random base-36 tag.
//!
//! The random source is injected so callers (and tests) decide how outcomes
//! are produced. Nothing here performs I/O or keeps state between calls
//! beyond the random source itself.

use std::collections::HashSet;

use aliasguard_common::address::GmailAddress;
use aliasguard_common::error::AliasError;
use aliasguard_common::method::{AliasMethod, BulkMethod};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

/// Length of tags produced by the random method.
pub const DEFAULT_TAG_LENGTH: usize = 6;

/// Smallest number of aliases a bulk request is clamped to.
pub const MIN_BULK: usize = 1;

/// Largest number of aliases a bulk request is clamped to.
pub const MAX_BULK: usize = 50;

/// Candidates tried per requested alias before a bulk request gives up.
pub const ATTEMPTS_PER_ALIAS: usize = 3;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// What the caller asks for in one generation round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasRequest {
    pub method: AliasMethod,
    /// Only read by [`AliasMethod::Plus`].
    pub tag: String,
    /// Only read by the bulk methods. Clamped to `[MIN_BULK, MAX_BULK]`.
    pub count: usize,
}

impl AliasRequest {
    pub fn plus(tag: impl Into<String>) -> Self {
        Self {
            method: AliasMethod::Plus,
            tag: tag.into(),
            count: 1,
        }
    }

    pub fn bulk(method: BulkMethod, count: usize) -> Self {
        Self {
            method: method.into(),
            tag: String::new(),
            count,
        }
    }
}

pub struct AliasGenerator<R> {
    rng: R,
}

impl AliasGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local random source.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for AliasGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AliasGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Runs one generation round for `address`.
    ///
    /// The plus method yields exactly one alias or fails with
    /// [`AliasError::MissingTag`]. The bulk methods never fail but may yield
    /// fewer aliases than requested.
    pub fn generate(
        &mut self,
        address: &GmailAddress,
        request: &AliasRequest,
    ) -> Result<Vec<String>, AliasError> {
        let local_part = address.local_part();
        let domain = address.domain();

        match request.method.bulk() {
            None => Ok(vec![generate_plus(local_part, domain, &request.tag)?]),
            Some(method) => Ok(self.generate_bulk(local_part, domain, method, request.count)),
        }
    }

    /// Returns `local_part` with dots inserted at random positions.
    ///
    /// Existing dots are stripped first and all position math uses the
    /// stripped form. Each gap between characters receives a dot with
    /// probability one half. When no dot lands, one is forced at the
    /// midpoint so the result always differs from the undotted name.
    /// Names shorter than two characters have no gap and come back as is.
    pub fn dot_variant(&mut self, local_part: &str) -> String {
        let undotted: Vec<char> = local_part.chars().filter(|c| *c != '.').collect();

        let Some((first, rest)) = undotted.split_first() else {
            return String::new();
        };
        if rest.is_empty() {
            return first.to_string();
        }

        let mut variant = String::with_capacity(undotted.len() * 2);
        let mut dots: usize = 0;
        variant.push(*first);
        for c in rest {
            if self.rng.random_bool(0.5) {
                variant.push('.');
                dots += 1;
            }
            variant.push(*c);
        }

        if dots == 0 {
            let (head, tail) = undotted.split_at(undotted.len() / 2);
            variant = head.iter().chain(['.'].iter()).chain(tail).collect();
        }

        variant
    }

    /// Returns `length` lowercase base-36 characters.
    ///
    /// Each character is one base-36 digit of a random fraction. Uniqueness is
    /// probabilistic only.
    pub fn random_tag(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(BASE36[self.rng.random_range(0..BASE36.len())]))
            .collect()
    }

    /// Produces up to `count` distinct aliases using `method`.
    ///
    /// `count` is clamped to `[MIN_BULK, MAX_BULK]`. At most
    /// `ATTEMPTS_PER_ALIAS * count` candidates are drawn; duplicates are
    /// dropped and insertion order is kept. Short names or unlucky draws can
    /// exhaust the budget early, in which case fewer aliases come back. A
    /// local part with no characters besides dots yields no dot aliases.
    pub fn generate_bulk(
        &mut self,
        local_part: &str,
        domain: &str,
        method: BulkMethod,
        count: usize,
    ) -> Vec<String> {
        let target: usize = count.clamp(MIN_BULK, MAX_BULK);
        let max_attempts: usize = target * ATTEMPTS_PER_ALIAS;

        let mut seen: HashSet<String> = HashSet::with_capacity(target);
        let mut aliases: Vec<String> = Vec::with_capacity(target);
        let mut attempts: usize = 0;

        while aliases.len() < target && attempts < max_attempts {
            attempts += 1;
            let candidate = match method {
                BulkMethod::Dot => {
                    let variant = self.dot_variant(local_part);
                    // A name made only of dots has nothing left to deliver to.
                    if variant.is_empty() {
                        continue;
                    }
                    format!("{variant}@{domain}")
                }
                BulkMethod::Random => format!(
                    "{local_part}+{}@{domain}",
                    self.random_tag(DEFAULT_TAG_LENGTH)
                ),
            };
            if seen.insert(candidate.clone()) {
                aliases.push(candidate);
            }
        }

        if aliases.len() < target {
            debug!(
                requested = target,
                produced = aliases.len(),
                attempts,
                "bulk generation ran out of attempts"
            );
        }

        aliases
    }
}

/// Builds `local_part+tag@domain` with the tag trimmed.
pub fn generate_plus(local_part: &str, domain: &str, tag: &str) -> Result<String, AliasError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(AliasError::MissingTag);
    }
    Ok(format!("{local_part}+{tag}@{domain}"))
}
