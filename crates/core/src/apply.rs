// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{StepDirection, WorkflowCommand};
use crate::error::CoreError;
use crate::state::{Submission, Workflow};
use chrono::Utc;
use rsc_club_domain::confirmation_id;
use tracing::info;

/// The result of a successful command application.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The input workflow is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The workflow after the command.
    pub workflow: Workflow,
    /// What the command achieved.
    pub outcome: TransitionOutcome,
}

/// What a command achieved.
///
/// A blocked step transition is an expected outcome, not an error: the
/// caller receives the offending field names and the state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A field was entered, appended, or cleared.
    FieldSet,
    /// The step changed (or was clamped at a boundary).
    Advanced {
        /// The step after the move (1-based).
        step: usize,
    },
    /// Validation rejected the transition; state is unchanged.
    Blocked {
        /// The unsatisfied required field names, in declaration order.
        missing: Vec<String>,
    },
    /// The workflow reached its terminal phase.
    Submitted(Submission),
}

/// Applies a command to a workflow, producing the new state and outcome.
///
/// # Arguments
///
/// * `workflow` - The current workflow state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition)` containing the new state and the outcome
/// * `Err(CoreError)` if the workflow no longer accepts commands
///
/// # Errors
///
/// Returns `CoreError::AlreadySubmitted` for any command against a
/// submitted workflow; Submitted is terminal per instance.
pub fn apply(workflow: &Workflow, command: WorkflowCommand) -> Result<Transition, CoreError> {
    if workflow.submission().is_some() {
        return Err(CoreError::AlreadySubmitted);
    }

    match command {
        WorkflowCommand::SetField { name, value } => {
            let mut next: Workflow = workflow.clone();
            next.set_field(&name, &value);
            Ok(Transition {
                workflow: next,
                outcome: TransitionOutcome::FieldSet,
            })
        }
        WorkflowCommand::AppendField { name, value } => {
            let mut next: Workflow = workflow.clone();
            next.append_field(&name, &value);
            Ok(Transition {
                workflow: next,
                outcome: TransitionOutcome::FieldSet,
            })
        }
        WorkflowCommand::ClearField { name } => {
            let mut next: Workflow = workflow.clone();
            next.clear_field(&name);
            Ok(Transition {
                workflow: next,
                outcome: TransitionOutcome::FieldSet,
            })
        }
        WorkflowCommand::Advance { direction } => {
            // Forward movement is gated on the current step's requirements
            if direction == StepDirection::Forward {
                let missing: Vec<String> = workflow.missing_required(workflow.current_step());
                if !missing.is_empty() {
                    return Ok(Transition {
                        workflow: workflow.clone(),
                        outcome: TransitionOutcome::Blocked { missing },
                    });
                }
            }

            let current: i64 = i64::try_from(workflow.current_step()).unwrap_or(i64::MAX);
            let target: usize = usize::try_from(current + direction.delta()).unwrap_or(1);

            let mut next: Workflow = workflow.clone();
            next.move_to(target);
            let step: usize = next.current_step();
            Ok(Transition {
                workflow: next,
                outcome: TransitionOutcome::Advanced { step },
            })
        }
        WorkflowCommand::Submit => {
            // Submission re-validates every step, the final step's
            // agreement fields included, so earlier gates cannot be
            // bypassed by jumping steps.
            let mut missing: Vec<String> = Vec::new();
            for step in 1..=workflow.config().total_steps() {
                missing.extend(workflow.missing_required(step));
            }
            if !missing.is_empty() {
                return Ok(Transition {
                    workflow: workflow.clone(),
                    outcome: TransitionOutcome::Blocked { missing },
                });
            }

            let submission: Submission = Submission {
                confirmation_id: confirmation_id(&workflow.config().confirmation_prefix),
                fields: workflow.fields().clone(),
                submitted_at: Utc::now(),
            };

            info!(
                form_type = workflow.config().form_type.as_str(),
                confirmation_id = submission.confirmation_id.as_str(),
                "workflow submitted"
            );

            let mut next: Workflow = workflow.clone();
            next.record_submission(submission.clone());
            Ok(Transition {
                workflow: next,
                outcome: TransitionOutcome::Submitted(submission),
            })
        }
    }
}
