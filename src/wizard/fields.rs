//! Text fields and the copy from a screen's form into wizard state

use super::state::{ProjectFields, Technique, WizardState};

/// Identifies an input field on any wizard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ProjectName,
    OutputPath,
    ModelPath,
    DataLoaderPath,
    PruningDense,
    PruningConv,
    DistillationTemperature,
    DistillationAlpha,
    HuffmanDense,
    HuffmanConv,
}

impl FieldId {
    /// Label shown as the field's title
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::ProjectName => "Project name",
            FieldId::OutputPath => "Output path",
            FieldId::ModelPath => "Model path",
            FieldId::DataLoaderPath => "Data loader path",
            FieldId::PruningDense => "Dense factor (%)",
            FieldId::PruningConv => "Conv factor (%)",
            FieldId::DistillationTemperature => "Temperature",
            FieldId::DistillationAlpha => "Alpha (%)",
            FieldId::HuffmanDense => "Dense clusters",
            FieldId::HuffmanConv => "Conv clusters",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::ProjectName => "e.g., keyword-spotting",
            FieldId::OutputPath => "e.g., ~/compressed",
            FieldId::ModelPath => "e.g., ~/models/kws.h5",
            FieldId::DataLoaderPath => "optional, e.g., ~/loaders/kws_loader.py",
            FieldId::PruningDense | FieldId::PruningConv => "e.g., 20",
            FieldId::DistillationTemperature => "e.g., 4",
            FieldId::DistillationAlpha => "e.g., 10",
            FieldId::HuffmanDense | FieldId::HuffmanConv => "e.g., 16",
        }
    }
}

/// Fields copied verbatim from the start screen
pub const PROJECT_FIELDS: [FieldId; 4] = [
    FieldId::ProjectName,
    FieldId::OutputPath,
    FieldId::ModelPath,
    FieldId::DataLoaderPath,
];

/// The two numeric fields belonging to a technique
pub fn technique_fields(technique: Technique) -> [FieldId; 2] {
    match technique {
        Technique::Pruning => [FieldId::PruningDense, FieldId::PruningConv],
        Technique::KnowledgeDistillation => [
            FieldId::DistillationTemperature,
            FieldId::DistillationAlpha,
        ],
        Technique::HuffmanCoding => [FieldId::HuffmanDense, FieldId::HuffmanConv],
    }
}

/// Ordered set of labeled text fields on a screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(FieldId, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, id: FieldId, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    /// Current text of a field; absent fields read as empty
    pub fn text(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == id) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((id, value)),
        }
    }

    /// Mutable text buffer for typing into a field
    pub fn buffer_mut(&mut self, id: FieldId) -> Option<&mut String> {
        self.fields
            .iter_mut()
            .find(|(field, _)| *field == id)
            .map(|(_, value)| value)
    }
}

fn project_slot(project: &mut ProjectFields, id: FieldId) -> Option<&mut String> {
    match id {
        FieldId::ProjectName => Some(&mut project.project_name),
        FieldId::OutputPath => Some(&mut project.output_path),
        FieldId::ModelPath => Some(&mut project.model_path),
        FieldId::DataLoaderPath => Some(&mut project.data_loader_path),
        _ => None,
    }
}

/// Copy the start screen's text fields into state without transformation
pub fn extract_project_fields(form: &Form, state: &mut WizardState) {
    for id in PROJECT_FIELDS {
        if let Some(slot) = project_slot(&mut state.project, id) {
            *slot = form.text(id).to_string();
        }
    }
}
