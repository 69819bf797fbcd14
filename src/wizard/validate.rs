//! Required-field and numeric-parameter checks
//!
//! Both passes report the first problem they hit as a [`ValidationError`].
//! The parameter pass commits each technique as soon as both of its values
//! parse, so a failure on a later technique leaves earlier ones committed.

use thiserror::Error;

use super::fields::{technique_fields, FieldId, Form};
use super::state::{DistillationParams, HuffmanParams, PruningParams, Technique, WizardState};

/// User-input problem that aborts a transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your data")]
    MissingRequiredField { field: FieldId },

    #[error("Please enter a number for {} or disable it.", .technique.warning_name())]
    InvalidNumericParameter { technique: Technique, field: FieldId },
}

impl ValidationError {
    /// Field the user should correct
    pub fn field(&self) -> FieldId {
        match self {
            ValidationError::MissingRequiredField { field } => *field,
            ValidationError::InvalidNumericParameter { field, .. } => *field,
        }
    }
}

/// Fields that must be non-empty before any forward navigation
pub const REQUIRED_FIELDS: [FieldId; 3] = [
    FieldId::ProjectName,
    FieldId::ModelPath,
    FieldId::OutputPath,
];

/// Forward pass: project name, model path and output path must be set
pub fn require_project_fields(state: &WizardState) -> Result<(), ValidationError> {
    for field in REQUIRED_FIELDS {
        let value = match field {
            FieldId::ProjectName => &state.project.project_name,
            FieldId::ModelPath => &state.project.model_path,
            _ => &state.project.output_path,
        };
        if value.is_empty() {
            return Err(ValidationError::MissingRequiredField { field });
        }
    }
    Ok(())
}

/// Parse an integer parameter, ignoring surrounding whitespace
fn parse_param(form: &Form, technique: Technique, field: FieldId) -> Result<i64, ValidationError> {
    form.text(field)
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumericParameter { technique, field })
}

fn parse_pair(form: &Form, technique: Technique) -> Result<(i64, i64), ValidationError> {
    let [first, second] = technique_fields(technique);
    Ok((
        parse_param(form, technique, first)?,
        parse_param(form, technique, second)?,
    ))
}

/// Parameter pass: parse and commit every enabled technique in order
///
/// Both values of a technique commit together; a bad second value leaves
/// the first uncommitted too.
pub fn commit_technique_params(form: &Form, state: &mut WizardState) -> Result<(), ValidationError> {
    let enabled: Vec<Technique> = state.enabled().collect();

    for technique in enabled {
        let (first, second) = match parse_pair(form, technique) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::debug!(%technique, field = ?e.field(), "parameter rejected");
                return Err(e);
            }
        };

        match technique {
            Technique::Pruning => {
                state.pruning = Some(PruningParams { dense: first, conv: second });
            }
            Technique::KnowledgeDistillation => {
                state.distillation = Some(DistillationParams { temperature: first, alpha: second });
            }
            Technique::HuffmanCoding => {
                state.huffman = Some(HuffmanParams {
                    clusters_dense: first,
                    clusters_conv: second,
                });
            }
        }
        tracing::debug!(%technique, first, second, "parameters committed");
    }

    Ok(())
}
