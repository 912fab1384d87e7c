use std::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

/// Recovery outcomes for units no pattern recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryKind {
    /// Folded into the preceding entry
    Continuation,
    /// Became a RAW / UNKNOWN entry
    Fallback,
}

/// Forces the wrapped group onto its own cache line so concurrent passes
/// updating different groups don't contend.
#[repr(align(64))]
#[derive(Debug, Default)]
pub struct CacheAligned<T>(pub T);

/// Per-format match counters (updated once per classified unit)
#[derive(Debug, Default)]
pub struct FormatMetrics {
    pub bracketed_module: AtomicU64,
    pub bracketed_simple: AtomicU64,
    pub celery_header: AtomicU64,
    pub django_threaded: AtomicU64,
    pub django_process: AtomicU64,
}

/// Units that matched nothing
#[derive(Debug, Default)]
pub struct RecoveryMetrics {
    pub continuations: AtomicU64,
    pub fallbacks: AtomicU64,
    pub too_large: AtomicU64,
}

#[derive(Debug, Default)]
pub struct TotalMetrics {
    pub units: AtomicU64,
    pub span_entries: AtomicU64,
    pub passes: AtomicU64,
}

/// Counters for parse passes.
///
/// All operations use `Ordering::Relaxed`; `snapshot()` reads are not
/// transactional across fields.
#[derive(Debug, Default)]
pub struct ParsingMetrics {
    pub formats: CacheAligned<FormatMetrics>,
    pub recovery: CacheAligned<RecoveryMetrics>,
    pub totals: CacheAligned<TotalMetrics>,
}

impl ParsingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit that one of the table's patterns matched
    #[inline]
    pub fn record_match(&self, format: super::LogFormat) {
        use super::LogFormat;

        self.totals.0.units.fetch_add(1, Ordering::Relaxed);

        let counter = match format {
            LogFormat::BracketedModule => &self.formats.0.bracketed_module,
            LogFormat::BracketedSimple => &self.formats.0.bracketed_simple,
            LogFormat::CeleryHeader => &self.formats.0.celery_header,
            LogFormat::DjangoThreaded => &self.formats.0.django_threaded,
            LogFormat::DjangoProcess => &self.formats.0.django_process,
            // fallbacks are counted through record_recovery
            LogFormat::Fallback => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_recovery(&self, kind: RecoveryKind) {
        self.totals.0.units.fetch_add(1, Ordering::Relaxed);
        match kind {
            RecoveryKind::Continuation => self.recovery.0.continuations.fetch_add(1, Ordering::Relaxed),
            RecoveryKind::Fallback => self.recovery.0.fallbacks.fetch_add(1, Ordering::Relaxed),
        };
    }

    #[inline]
    pub fn record_too_large(&self) {
        self.recovery.0.too_large.fetch_add(1, Ordering::Relaxed);
    }

    /// Record entries produced by one celery span split
    #[inline]
    pub fn record_span_entries(&self, count: usize) {
        self.totals.0.span_entries.fetch_add(count as u64, Ordering::Relaxed);
        self.formats.0.celery_header.fetch_add(count as u64, Ordering::Relaxed);
        self.totals.0.units.fetch_add(count as u64, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_pass(&self) {
        self.totals.0.passes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let units = self.totals.0.units.load(Ordering::Relaxed);
        let continuations = self.recovery.0.continuations.load(Ordering::Relaxed);
        let fallbacks = self.recovery.0.fallbacks.load(Ordering::Relaxed);
        let unmatched = continuations + fallbacks;

        MetricsSnapshot {
            bracketed_module: self.formats.0.bracketed_module.load(Ordering::Relaxed),
            bracketed_simple: self.formats.0.bracketed_simple.load(Ordering::Relaxed),
            celery_header: self.formats.0.celery_header.load(Ordering::Relaxed),
            django_threaded: self.formats.0.django_threaded.load(Ordering::Relaxed),
            django_process: self.formats.0.django_process.load(Ordering::Relaxed),

            continuations,
            fallbacks,
            too_large: self.recovery.0.too_large.load(Ordering::Relaxed),

            units,
            span_entries: self.totals.0.span_entries.load(Ordering::Relaxed),
            passes: self.totals.0.passes.load(Ordering::Relaxed),
            match_rate: if units > 0 {
                (units - unmatched) as f64 / units as f64
            } else {
                1.0
            },
        }
    }
}

/// A read-only, serializable snapshot of [`ParsingMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub bracketed_module: u64,
    pub bracketed_simple: u64,
    pub celery_header: u64,
    pub django_threaded: u64,
    pub django_process: u64,

    pub continuations: u64,
    pub fallbacks: u64,
    pub too_large: u64,

    pub units: u64,
    pub span_entries: u64,
    pub passes: u64,
    pub match_rate: f64,
}
