use thiserror::Error;

use crate::{
    case::{CaseStyle, ParseCaseStyleError},
    pipeline::Pipeline,
    stage::{Stage, change_case::ChangeCase, strip_hidden::StripHidden},
};
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrubError {
    #[error("unknown stage `{0}`")]
    UnknownStage(String),
    #[error("case style error: {0}")]
    CaseStyle(#[from] ParseCaseStyleError),
}

/// A configured chain of stages, run left to right.
#[derive(Debug, Clone, Default)]
pub struct Scrubber {
    pipeline: Pipeline,
}

impl Scrubber {
    pub fn builder() -> ScrubberBuilder {
        ScrubberBuilder::default()
    }

    pub fn scrub<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.pipeline.process(text.into())
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }
}

#[derive(Default)]
pub struct ScrubberBuilder {
    stages: Vec<Arc<dyn Stage>>,
}

impl ScrubberBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn strip_hidden(self) -> Self {
        self.add_stage(StripHidden)
    }

    pub fn change_case(self, style: CaseStyle, auto_split: bool) -> Self {
        self.add_stage(ChangeCase { style, auto_split })
    }

    /// Add a stage by name.
    ///
    /// * `strip_hidden` (or `strip`)
    /// * any case style name, e.g. `snake_case`, `kebab`, `Title Case`
    /// * `<style>:spaces` to turn auto-splitting off, `<style>:auto` to keep it
    pub fn stage_by_name(self, name: &str) -> Result<Self, ScrubError> {
        let name = name.trim();
        if matches!(name, "strip_hidden" | "strip") {
            return Ok(self.strip_hidden());
        }
        match name.split_once(':') {
            Some((style, mode)) => {
                let style: CaseStyle = style.parse()?;
                let auto_split = match mode.trim() {
                    "spaces" => false,
                    "auto" => true,
                    _ => return Err(ScrubError::UnknownStage(name.to_owned())),
                };
                Ok(self.change_case(style, auto_split))
            }
            None => {
                let style: CaseStyle = name
                    .parse()
                    .map_err(|_| ScrubError::UnknownStage(name.to_owned()))?;
                Ok(self.change_case(style, true))
            }
        }
    }

    pub fn stages_by_name<'n>(
        self,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<Self, ScrubError> {
        names
            .into_iter()
            .try_fold(self, |builder, name| builder.stage_by_name(name))
    }

    pub fn build(self) -> Scrubber {
        Scrubber {
            pipeline: Pipeline::new(self.stages),
        }
    }
}
