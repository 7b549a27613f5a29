//! Raw integer classification.
//!
//! The classifier scans a fixed priority table of kinds and returns the first whose
//! range contains the input. The table is [`AddressKind::ALL`], optionally with each
//! plain-view kind moved ahead of the decomposed kind it shares bounds with.

use crate::config::{ClassifierConfig, CoincidentView};
use crate::error::ClassifyError;
use crate::handle::AddressHandle;
use crate::kind::AddressKind;

/// Maps raw script integers to the kind that owns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classifier {
    config: ClassifierConfig,
    priority: [AddressKind; AddressKind::COUNT],
}

impl Classifier {
    /// Classifier using [`ClassifierConfig::new`].
    pub const DEFAULT: Self = Self::new(ClassifierConfig::new());

    /// Builds the priority table for `config`.
    pub const fn new(config: ClassifierConfig) -> Self {
        let mut priority = AddressKind::ALL;
        if matches!(config.coincident, CoincidentView::Plain) {
            // each plain view directly follows its decomposed kind in ALL
            let mut i = 1;
            while i < priority.len() {
                if priority[i].is_plain_view() {
                    let decomposed = priority[i - 1];
                    priority[i - 1] = priority[i];
                    priority[i] = decomposed;
                }
                i += 1;
            }
        }
        Self { config, priority }
    }

    /// Settings this classifier was built from.
    pub const fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Kinds in the order they are tested.
    pub fn priority(&self) -> &[AddressKind] {
        &self.priority
    }

    /// Returns the first kind in priority order whose range contains `raw`.
    pub fn kind_of(&self, raw: i32) -> Option<AddressKind> {
        self.priority
            .iter()
            .copied()
            .find(|kind| kind.range().contains(i64::from(raw)))
    }

    /// Classifies `raw`, constructing it as the kind that owns it.
    pub fn classify(&self, raw: i32) -> Result<AddressHandle, ClassifyError> {
        for &kind in &self.priority {
            if let Ok(handle) = AddressHandle::with_kind(kind, raw) {
                tracing::trace!(raw, %kind, "classified address");
                return Ok(handle);
            }
        }

        tracing::debug!(raw, "integer outside every address range");
        Err(ClassifyError::Unmapped(raw))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classifies `raw` with the default priority.
pub fn classify(raw: i32) -> Result<AddressHandle, ClassifyError> {
    Classifier::DEFAULT.classify(raw)
}
