//! One-shot catalog load: fetch, then hand the records to a [`CatalogStore`].

use std::sync::{PoisonError, RwLock};

use storefront_core::{CatalogStore, StockDraw};
use tokio::sync::watch;

use crate::error::FetchError;
use crate::source::ProductSource;

/// Owned by the surface that displays the catalog. Tearing it down, or
/// dropping it, tells any in-flight load to discard its result.
#[derive(Debug)]
pub struct Mount {
    alive: watch::Sender<bool>,
}

impl Mount {
    #[must_use]
    pub fn new() -> Self {
        let (alive, _) = watch::channel(true);
        Self { alive }
    }

    #[must_use]
    pub fn liveness(&self) -> Liveness {
        Liveness {
            alive: self.alive.subscribe(),
        }
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.alive.send_replace(false);
    }
}

/// Read side of a [`Mount`], passed to the loader.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: watch::Receiver<bool>,
}

impl Liveness {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        *self.alive.borrow()
    }

    /// Resolves once the owning [`Mount`] is gone.
    pub async fn torn_down(&self) {
        let mut alive = self.alive.clone();
        // Err means the sender is gone, which also counts as torn down.
        let _ = alive.wait_for(|alive| !*alive).await;
    }
}

/// Operational log collaborator for failed loads.
pub trait DiagnosticSink {
    fn report(&mut self, error: &FetchError);
}

/// Forwards diagnostics to `tracing::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, error: &FetchError) {
        tracing::error!(error = %error, "failed to load product catalog");
    }
}

impl DiagnosticSink for Vec<String> {
    fn report(&mut self, error: &FetchError) {
        self.push(error.to_string());
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { count: usize },
    /// The fetch failed; the error was already reported to the diagnostic sink.
    Failed(FetchError),
    /// The mount went away before the fetch resolved; nothing was applied.
    Cancelled,
}

pub struct CatalogLoader<S, D = TracingDiagnostics> {
    source: S,
    diagnostics: D,
    loading: watch::Sender<bool>,
}

impl<S: ProductSource> CatalogLoader<S, TracingDiagnostics> {
    pub fn new(source: S) -> Self {
        Self::with_diagnostics(source, TracingDiagnostics)
    }
}

impl<S: ProductSource, D: DiagnosticSink> CatalogLoader<S, D> {
    pub fn with_diagnostics(source: S, diagnostics: D) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            source,
            diagnostics,
            loading,
        }
    }

    /// Subscribes to the `loading` flag.
    #[must_use]
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs one fetch and, if `liveness` still holds when it resolves, loads
    /// the records into `store`.
    ///
    /// `loading` is true from the start of the call until the records are
    /// applied, the fetch fails, or the load is cancelled. The store's write
    /// lock is taken only after the fetch resolves. A failed fetch leaves the
    /// store untouched and is reported to the diagnostic sink exactly once.
    pub async fn load_into<T>(
        &mut self,
        store: &RwLock<CatalogStore>,
        stock: &mut T,
        liveness: &Liveness,
    ) -> LoadOutcome
    where
        T: StockDraw + ?Sized,
    {
        self.loading.send_replace(true);

        let fetched = tokio::select! {
            biased;
            () = liveness.torn_down() => None,
            result = self.source.fetch_products() => Some(result),
        };

        let outcome = match fetched {
            Some(Ok(records)) if liveness.is_alive() => {
                let mut store = store.write().unwrap_or_else(PoisonError::into_inner);
                let count = store.load(records, stock);
                tracing::info!(count, "product catalog loaded");
                LoadOutcome::Loaded { count }
            }
            Some(Err(error)) if liveness.is_alive() => {
                self.diagnostics.report(&error);
                LoadOutcome::Failed(error)
            }
            _ => {
                tracing::debug!("catalog load cancelled, discarding result");
                LoadOutcome::Cancelled
            }
        };

        self.loading.send_replace(false);
        outcome
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
