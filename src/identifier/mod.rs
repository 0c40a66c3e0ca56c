use crate::{
    error::{Error, Result},
    model::MarkovModel,
    table::{CountTable, FrequencyMap, FrequencyMapConfig, StdCountTable, TableBackend},
};
use strum_macros::Display;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Speaker {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Identification {
    /// Normalized log probability of the unknown text under speaker A's model
    pub score_a: f64,
    /// Normalized log probability of the unknown text under speaker B's model
    pub score_b: f64,
    pub verdict: Speaker,
}

impl Identification {
    /// Ties go to [`Speaker::B`]
    #[inline]
    fn from_scores(score_a: f64, score_b: f64) -> Self {
        let verdict = if score_a > score_b {
            Speaker::A
        } else {
            Speaker::B
        };
        Self {
            score_a,
            score_b,
            verdict,
        }
    }
}

/// Compares two speakers' Markov models on an unknown text
#[derive(Clone, Copy, Debug)]
pub struct SpeakerIdentifier {
    order: usize,
    backend: TableBackend,
    map_config: FrequencyMapConfig,
    parallel: bool,
}

impl SpeakerIdentifier {
    /// Defaults to [`TableBackend::HashTable`], parallel model building if available
    #[inline]
    pub fn new(order: usize) -> Self {
        Self {
            order,
            backend: TableBackend::default(),
            map_config: FrequencyMapConfig::default(),
            parallel: cfg!(not(target_family = "wasm")),
        }
    }

    #[inline]
    pub fn backend(mut self, backend: TableBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Used only by [`TableBackend::HashTable`].
    /// Model tables always count from 0, `default_value` is ignored.
    #[inline]
    pub fn map_config(mut self, map_config: FrequencyMapConfig) -> Self {
        self.map_config = map_config;
        self
    }

    /// Build both models at once. No effect on wasm
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn identify(
        &self,
        speech_a: &str,
        speech_b: &str,
        speech_unknown: &str,
    ) -> Result<Identification> {
        if self.order < 1 {
            return Err(Error::InvalidArgument("order must be >= 1"));
        }
        if speech_a.is_empty() || speech_b.is_empty() {
            return Err(Error::InvalidArgument("speaker texts must not be empty"));
        }
        if speech_unknown.is_empty() {
            return Err(Error::InvalidArgument("unknown text must not be empty"));
        }

        let (score_a, score_b) = match self.backend {
            TableBackend::HashTable => {
                let map_config = self.map_config.default_value(0);
                self.scores(speech_a, speech_b, speech_unknown, move || {
                    FrequencyMap::with_config(map_config)
                })?
            }
            TableBackend::Dict => {
                self.scores(speech_a, speech_b, speech_unknown, || {
                    Ok(StdCountTable::new())
                })?
            }
        };

        let identification = Identification::from_scores(score_a, score_b);
        tracing::debug!(
            order = self.order,
            backend = %self.backend,
            score_a,
            score_b,
            verdict = %identification.verdict,
            "speaker identified"
        );

        Ok(identification)
    }

    fn scores<T, F>(
        &self,
        speech_a: &str,
        speech_b: &str,
        speech_unknown: &str,
        new_table: F,
    ) -> Result<(f64, f64)>
    where
        T: CountTable + Send,
        F: Fn() -> Result<T> + Sync,
    {
        let train = |speech: &str| MarkovModel::train_with(self.order, speech, new_table()?);

        let (model_a, model_b) = if self.parallel {
            Self::join(|| train(speech_a), || train(speech_b))
        } else {
            (train(speech_a), train(speech_b))
        };
        let (model_a, model_b) = (model_a?, model_b?);

        let len = speech_unknown.chars().count() as f64;
        Ok((
            model_a.log_probability(speech_unknown) / len,
            model_b.log_probability(speech_unknown) / len,
        ))
    }

    #[cfg(not(target_family = "wasm"))]
    #[inline]
    fn join<RA: Send, RB: Send>(
        a: impl FnOnce() -> RA + Send,
        b: impl FnOnce() -> RB + Send,
    ) -> (RA, RB) {
        rayon::join(a, b)
    }

    #[cfg(target_family = "wasm")]
    #[inline]
    fn join<RA, RB>(a: impl FnOnce() -> RA, b: impl FnOnce() -> RB) -> (RA, RB) {
        (a(), b())
    }
}

/// Builds a model of `order` for each speaker with default settings,
/// and scores `speech_unknown` under both
#[inline]
pub fn identify_speaker(
    speech_a: &str,
    speech_b: &str,
    speech_unknown: &str,
    order: usize,
    backend: TableBackend,
) -> Result<Identification> {
    SpeakerIdentifier::new(order)
        .backend(backend)
        .identify(speech_a, speech_b, speech_unknown)
}
