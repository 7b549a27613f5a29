/// Which kind the classifier returns where two kinds share identical bounds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CoincidentView {
    /// Prefer the kind that decomposes into type/data/item ids.
    #[default]
    Decomposed,
    /// Prefer the flat variable view.
    Plain,
}

/// Classifier settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    /// Resolution of the user and system database regions.
    pub coincident: CoincidentView,
}

impl ClassifierConfig {
    pub const DEFAULT_COINCIDENT: CoincidentView = CoincidentView::Decomposed;

    pub const fn new() -> Self {
        Self {
            coincident: Self::DEFAULT_COINCIDENT,
        }
    }

    pub const fn with_coincident(coincident: CoincidentView) -> Self {
        Self { coincident }
    }
}
