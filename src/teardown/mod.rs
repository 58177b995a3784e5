// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequential teardown of the metadata service resources.

pub mod invoker;
pub mod plan;
pub mod report;

pub use invoker::TeardownInvoker;
pub use plan::{DeleteStep, ResourceKind, ACTIVE_STEPS, DISABLED_STEPS};
pub use report::{StepOutcome, TeardownReport};
