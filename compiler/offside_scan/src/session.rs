//! One-call entry point for hosts.
//!
//! A [`ScanSession`] owns the per-stream cache registry and the config, so a
//! host only has to say which scanner to run, where, and against which
//! stream and parse stack.

use tracing::trace;

use crate::config::ScanConfig;
use crate::input::{InputStream, StreamId};
use crate::registry::IndentCacheRegistry;
use crate::scanner::{ExternalScanner, ScanContext};
use crate::stack::ParseStack;
use crate::token::{Accepted, ScanToken};

/// Scanner driver state shared across every stream a host lexes.
#[derive(Debug, Default)]
pub struct ScanSession {
    config: ScanConfig,
    caches: IndentCacheRegistry,
}

impl ScanSession {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            caches: IndentCacheRegistry::new(),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn registry(&self) -> &IndentCacheRegistry {
        &self.caches
    }

    /// Run `scanner` at `start` in `input`, returning its token if it
    /// accepted one.
    pub fn run(
        &mut self,
        scanner: &dyn ExternalScanner,
        input: &dyn InputStream,
        stack: &dyn ParseStack,
        start: u32,
    ) -> Option<Accepted> {
        let stream = input.stream_id();
        let cache = self.caches.cache_for(stream);
        let mut cx = ScanContext::new(input, stack, cache, &self.config);
        let mut token = ScanToken::new(start);

        let _span = tracing::trace_span!("scan", scanner = scanner.name(), %stream, start).entered();
        scanner.scan(&mut cx, &mut token);

        let accepted = token.accepted();
        match accepted {
            Some(Accepted { kind, end }) => trace!(%kind, end, "accepted"),
            None => trace!("declined"),
        }
        accepted
    }

    /// Forget the cache of a stream that will not be scanned again.
    pub fn release(&mut self, stream: StreamId) -> bool {
        self.caches.release(stream).is_some()
    }
}
