use crate::settings::{CustomCodePolicy, ExpiryPolicy, RegistrySettings};
use jiff::{SignedDuration, Timestamp};
use parking_lot::{Mutex, RwLock};
use quicklink_core::{
    Clock, LinkEntry, LinkService, ResolveError, ShortCode, StatRow, SubmissionRequest,
    SubmitError, SystemClock,
};
use quicklink_generator::Generator;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

/// A stored link. Everything but the access log is fixed at creation.
#[derive(Debug)]
struct StoredLink {
    long_url: String,
    short_code: ShortCode,
    created_at: Timestamp,
    expires_at: Timestamp,
    access_log: Mutex<Vec<Timestamp>>,
}

impl StoredLink {
    fn snapshot(&self) -> LinkEntry {
        LinkEntry {
            long_url: self.long_url.clone(),
            short_code: self.short_code.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            access_log: self.access_log.lock().clone(),
        }
    }

    fn stat_row(&self) -> StatRow {
        StatRow {
            short_code: self.short_code.clone(),
            long_url: self.long_url.clone(),
            expires_at: self.expires_at,
            click_count: self.access_log.lock().len(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    /// Insertion order.
    entries: Vec<StoredLink>,
    /// Every code held, expired or not.
    codes: HashSet<ShortCode>,
    /// Position of the first entry holding each code.
    index: HashMap<ShortCode, usize>,
}

impl State {
    fn push(&mut self, link: StoredLink) {
        let position = self.entries.len();
        self.codes.insert(link.short_code.clone());
        self.index
            .entry(link.short_code.clone())
            .or_insert(position);
        self.entries.push(link);
    }

    fn find(&self, code: &str) -> Option<&StoredLink> {
        self.index.get(code).map(|&position| &self.entries[position])
    }
}

/// The link registry.
///
/// Share it between handlers behind an `Arc`. Mutation discipline:
/// - `submit` holds the write lock for the whole batch, so checking a code
///   for uniqueness and inserting it happen as one step.
/// - `resolve` holds the read lock and appends to the entry's own access
///   log under that entry's mutex, so concurrent resolutions never drop a
///   record and resolutions of different codes do not contend.
/// - readers only ever see fully constructed entries.
pub struct LinkRegistry<G, C = SystemClock> {
    state: RwLock<State>,
    generator: G,
    clock: C,
    settings: RegistrySettings,
}

impl<G: Generator> LinkRegistry<G> {
    /// Creates an empty registry with default settings and the system clock.
    pub fn new(generator: G) -> Self {
        Self::with_settings(generator, RegistrySettings::default())
    }

    pub fn with_settings(generator: G, settings: RegistrySettings) -> Self {
        Self::with_clock(generator, SystemClock, settings)
    }
}

impl<G: Generator, C: Clock> LinkRegistry<G, C> {
    pub fn with_clock(generator: G, clock: C, settings: RegistrySettings) -> Self {
        Self {
            state: RwLock::new(State::default()),
            generator,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Processes a batch of submissions in input order.
    ///
    /// Each request succeeds or fails on its own. Generated codes avoid every
    /// code already held, including those assigned earlier in this batch.
    pub fn submit(
        &self,
        requests: Vec<SubmissionRequest>,
    ) -> Vec<Result<LinkEntry, SubmitError>> {
        let mut state = self.state.write();
        requests
            .into_iter()
            .map(|request| self.submit_one(&mut state, request))
            .collect()
    }

    fn submit_one(
        &self,
        state: &mut State,
        request: SubmissionRequest,
    ) -> Result<LinkEntry, SubmitError> {
        if let Err(err) = validate_url(&request.long_url) {
            debug!(long_url = %request.long_url, error = %err, "rejected submission");
            return Err(err);
        }

        let short_code = match request.requested_code() {
            Some(code) => self.admit_custom_code(state, code)?,
            None => self.generator.allocate(&state.codes),
        };

        let validity_minutes = request
            .validity_minutes
            .unwrap_or(self.settings.default_validity_minutes);
        let created_at = self.clock.now();
        let expires_at = created_at
            .checked_add(SignedDuration::from_mins(i64::from(validity_minutes)))
            .unwrap_or(Timestamp::MAX);

        let link = StoredLink {
            long_url: request.long_url,
            short_code,
            created_at,
            expires_at,
            access_log: Mutex::new(Vec::new()),
        };
        let entry = link.snapshot();
        state.push(link);

        info!(
            code = %entry.short_code,
            long_url = %entry.long_url,
            expires_at = %entry.expires_at,
            "link shortened"
        );
        Ok(entry)
    }

    fn admit_custom_code(&self, state: &State, code: &str) -> Result<ShortCode, SubmitError> {
        match self.settings.custom_codes {
            CustomCodePolicy::Verbatim => Ok(ShortCode::custom_unchecked(code)),
            CustomCodePolicy::Checked => {
                let code = ShortCode::new(code).inspect_err(|err| {
                    debug!(code = %code, error = %err, "rejected custom code");
                })?;
                if state.codes.contains(&code) {
                    debug!(code = %code, "custom code already taken");
                    return Err(SubmitError::AliasConflict(code.to_string()));
                }
                Ok(code)
            }
        }
    }

    /// Resolves `code` to its long URL and records one access.
    ///
    /// A miss leaves the registry untouched.
    pub fn resolve(&self, code: &str) -> Result<String, ResolveError> {
        trace!(code = %code, "resolving short code");

        let state = self.state.read();
        let Some(link) = state.find(code) else {
            trace!(code = %code, "short code not found");
            return Err(ResolveError::NotFound(code.to_string()));
        };

        let mut access_log = link.access_log.lock();
        let now = self.clock.now();
        if self.settings.expiry == ExpiryPolicy::Strict && now >= link.expires_at {
            debug!(code = %code, expires_at = %link.expires_at, "short code has expired");
            return Err(ResolveError::Expired(code.to_string()));
        }
        access_log.push(now);

        debug!(
            code = %code,
            url = %link.long_url,
            clicks = access_log.len(),
            "resolved short code"
        );
        Ok(link.long_url.clone())
    }

    /// One row per entry in insertion order. Expired entries are included.
    pub fn statistics(&self) -> Vec<StatRow> {
        self.state
            .read()
            .entries
            .iter()
            .map(StoredLink::stat_row)
            .collect()
    }

    /// Returns a snapshot of the entry for `code` without recording an access.
    pub fn get(&self, code: &str) -> Option<LinkEntry> {
        self.state.read().find(code).map(StoredLink::snapshot)
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: Generator, C: Clock + 'static> LinkService for LinkRegistry<G, C> {
    fn submit(&self, requests: Vec<SubmissionRequest>) -> Vec<Result<LinkEntry, SubmitError>> {
        LinkRegistry::submit(self, requests)
    }

    fn resolve(&self, code: &str) -> Result<String, ResolveError> {
        LinkRegistry::resolve(self, code)
    }

    fn statistics(&self) -> Vec<StatRow> {
        LinkRegistry::statistics(self)
    }
}

/// Only the scheme prefix is checked; the rest of the URL is taken as is.
fn validate_url(url: &str) -> Result<(), SubmitError> {
    if !url.starts_with("http") {
        return Err(SubmitError::InvalidUrl(format!(
            "URL must start with http or https: {}",
            url
        )));
    }
    Ok(())
}
