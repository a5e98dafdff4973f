// src/pipeline.rs
use crate::stage::Stage;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                trace!(stage = stage.name(), "stage skipped");
                continue;
            }

            let before = current.len();
            current = stage.apply(current);
            debug!(
                stage = stage.name(),
                bytes_before = before,
                bytes_after = current.len(),
                "stage applied"
            );
        }

        current
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}
