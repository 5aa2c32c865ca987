// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, SecondsFormat, Utc};

/// The value(s) entered for a single form field.
///
/// A field holds one value until a second value arrives for the same name
/// (repeated checkbox groups), at which point it becomes an ordered
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single entered value.
    Single(String),
    /// Multiple values for the same field name, in entry order.
    Many(Vec<String>),
}

impl FieldValue {
    /// Returns the first entered value.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Many(values) => values.first().map_or("", String::as_str),
        }
    }

    /// Returns true when no usable value has been entered.
    ///
    /// A sequence is blank only when every entry is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Single(value) => value.trim().is_empty(),
            Self::Many(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }

    /// Returns true when the value satisfies an agreement-type field.
    ///
    /// Checkbox-like fields are satisfied by any non-blank value other
    /// than an explicit `false`.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        !self.is_blank() && self.first() != "false"
    }
}

/// An insertion-ordered mapping from field name to entered value(s).
///
/// Field order is preserved so that validation reports and stored
/// submissions read in the order the form presented the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the value(s) entered for a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    /// Returns the first value entered for a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(FieldValue::first)
    }

    /// Sets a field, replacing any previous value(s).
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| entry_name == name)
        {
            entry.1 = FieldValue::Single(value.to_string());
        } else {
            self.entries
                .push((name.to_string(), FieldValue::Single(value.to_string())));
        }
    }

    /// Appends a value to a field, upgrading it to a sequence on the
    /// second value.
    pub fn append(&mut self, name: &str, value: &str) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(entry_name, _)| entry_name == name)
        {
            let current: &mut FieldValue = &mut entry.1;
            match current {
                FieldValue::Single(existing) => {
                    let first: String = std::mem::take(existing);
                    *current = FieldValue::Many(vec![first, value.to_string()]);
                }
                FieldValue::Many(values) => values.push(value.to_string()),
            }
        } else {
            self.entries
                .push((name.to_string(), FieldValue::Single(value.to_string())));
        }
    }

    /// Removes a field entirely.
    pub fn clear(&mut self, name: &str) {
        self.entries.retain(|(entry_name, _)| entry_name != name);
    }

    /// Returns true when no field has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates the fields in entry order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// How a required field must be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be non-empty after trimming.
    Text,
    /// Must be checked (agreement checkboxes).
    Agreement,
}

/// A field that must be satisfied before its step is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField {
    /// The form field name.
    pub name: String,
    /// How the field is satisfied.
    pub kind: FieldKind,
}

impl RequiredField {
    /// Creates a required field declaration.
    #[must_use]
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// The declared shape of one workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// Display title for the step.
    pub title: String,
    /// The fields that must be satisfied to leave this step forward.
    pub required: Vec<RequiredField>,
}

impl StepConfig {
    /// Creates a step declaration.
    #[must_use]
    pub fn new(title: &str, required: Vec<RequiredField>) -> Self {
        Self {
            title: title.to_string(),
            required,
        }
    }
}

/// The fixed configuration of a workflow instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// The form type label (e.g. `membership`), used for logging and as
    /// the per-form-type storage discriminator.
    pub form_type: String,
    /// Prefix for generated confirmation identifiers.
    pub confirmation_prefix: String,
    /// The ordered step declarations.
    pub steps: Vec<StepConfig>,
}

impl WorkflowConfig {
    /// Creates a workflow configuration.
    #[must_use]
    pub fn new(form_type: &str, confirmation_prefix: &str, steps: Vec<StepConfig>) -> Self {
        Self {
            form_type: form_type.to_string(),
            confirmation_prefix: confirmation_prefix.to_string(),
            steps,
        }
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }
}

/// The derived lifecycle phase of a workflow instance.
///
/// Only `Editing` and `ReadyToSubmit` are re-enterable; `Submitted` is
/// terminal per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// No fields have been entered yet.
    Idle,
    /// Fields are being populated; requirements not yet satisfied.
    Editing,
    /// Every step's requirements are satisfied.
    ReadyToSubmit,
    /// The workflow has produced a submission. Terminal.
    Submitted,
}

/// The display state of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// The step is behind the current one.
    Completed,
    /// The step is the current one.
    Active,
    /// The step is ahead of the current one.
    Pending,
}

/// A completed submission: the terminal product of a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Generated confirmation identifier.
    pub confirmation_id: String,
    /// Snapshot of the entered fields at submission time.
    pub fields: FieldMap,
    /// When the submission was produced.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Converts the submission to a flat stored value.
    ///
    /// Single-valued fields become strings, sequences become arrays; the
    /// confirmation identifier and timestamp ride along as reserved keys.
    #[must_use]
    pub fn to_stored(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (name, value) in self.fields.entries() {
            let stored = match value {
                FieldValue::Single(single) => serde_json::Value::String(single.clone()),
                FieldValue::Many(values) => serde_json::Value::Array(
                    values
                        .iter()
                        .map(|entry| serde_json::Value::String(entry.clone()))
                        .collect(),
                ),
            };
            object.insert(name.to_string(), stored);
        }
        object.insert(
            String::from("confirmationId"),
            serde_json::Value::String(self.confirmation_id.clone()),
        );
        object.insert(
            String::from("submittedAt"),
            serde_json::Value::String(
                self.submitted_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        );
        serde_json::Value::Object(object)
    }
}

/// A multi-step form in progress.
///
/// The workflow never touches a rendering surface: callers feed it field
/// values and transition commands, and read back validation results,
/// progress, and the derived phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    config: WorkflowConfig,
    /// 1-based, always within `[1, total_steps]`.
    current_step: usize,
    fields: FieldMap,
    submission: Option<Submission>,
}

impl Workflow {
    /// Creates a workflow at its first step with no fields entered.
    #[must_use]
    pub const fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            current_step: 1,
            fields: FieldMap::new(),
            submission: None,
        }
    }

    /// Returns the workflow configuration.
    #[must_use]
    pub const fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Returns the current step (1-based).
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the entered fields.
    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns the submission, if the workflow has reached its terminal
    /// phase.
    #[must_use]
    pub const fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Returns the fraction of steps reached, for progress display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.config.total_steps() == 0 {
            return 0.0;
        }
        self.current_step as f64 / self.config.total_steps() as f64
    }

    /// Classifies a step relative to the current one.
    #[must_use]
    pub const fn step_state(&self, step: usize) -> StepState {
        if step < self.current_step {
            StepState::Completed
        } else if step == self.current_step {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    /// Returns the names of a step's unsatisfied required fields, in
    /// declaration order.
    ///
    /// Text fields must be non-empty after trimming; agreement fields
    /// must be checked. Steps outside the configuration have no
    /// requirements.
    #[must_use]
    pub fn missing_required(&self, step: usize) -> Vec<String> {
        let Some(step_config) = step.checked_sub(1).and_then(|idx| self.config.steps.get(idx))
        else {
            return Vec::new();
        };

        step_config
            .required
            .iter()
            .filter(|field| {
                let value = self.fields.get(&field.name);
                match field.kind {
                    FieldKind::Text => value.is_none_or(FieldValue::is_blank),
                    FieldKind::Agreement => !value.is_some_and(FieldValue::is_checked),
                }
            })
            .map(|field| field.name.clone())
            .collect()
    }

    /// Derives the lifecycle phase from the current state.
    #[must_use]
    pub fn phase(&self) -> WorkflowPhase {
        if self.submission.is_some() {
            return WorkflowPhase::Submitted;
        }
        if self.fields.is_empty() {
            return WorkflowPhase::Idle;
        }
        let all_satisfied: bool =
            (1..=self.config.total_steps()).all(|step| self.missing_required(step).is_empty());
        if all_satisfied {
            WorkflowPhase::ReadyToSubmit
        } else {
            WorkflowPhase::Editing
        }
    }

    pub(crate) fn set_field(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub(crate) fn append_field(&mut self, name: &str, value: &str) {
        self.fields.append(name, value);
    }

    pub(crate) fn clear_field(&mut self, name: &str) {
        self.fields.clear(name);
    }

    pub(crate) fn move_to(&mut self, step: usize) {
        self.current_step = step.clamp(1, self.config.total_steps().max(1));
    }

    pub(crate) fn record_submission(&mut self, submission: Submission) {
        self.submission = Some(submission);
    }
}
