// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::TeardownError;
use crate::teardown::plan::DeleteStep;
use std::process::ExitCode;

/// Result of one attempted delete
#[derive(Debug)]
pub struct StepOutcome {
    pub step: DeleteStep,
    pub namespace: String,
    pub result: Result<(), TeardownError>,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a teardown run, in execution order
#[derive(Debug, Default)]
pub struct TeardownReport {
    pub outcomes: Vec<StepOutcome>,
}

impl TeardownReport {
    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Exit status of the run: that of the last step, not an aggregate
    pub fn exit_code(&self) -> ExitCode {
        if self.last_step_succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    pub fn last_step_succeeded(&self) -> bool {
        self.outcomes.last().map_or(true, StepOutcome::is_success)
    }
}
