use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Compression techniques the pipeline can apply
///
/// Ordering matters: parameter validation visits enabled techniques
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    Pruning,
    KnowledgeDistillation,
    HuffmanCoding,
}

impl Technique {
    pub const ALL: [Technique; 3] = [
        Technique::Pruning,
        Technique::KnowledgeDistillation,
        Technique::HuffmanCoding,
    ];

    /// Display name used in titles and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Technique::Pruning => "Pruning",
            Technique::KnowledgeDistillation => "Knowledge Distillation",
            Technique::HuffmanCoding => "Huffman Coding",
        }
    }

    /// Name used inside the "enter a number" warning
    pub fn warning_name(&self) -> &'static str {
        match self {
            Technique::Pruning => "pruning",
            Technique::KnowledgeDistillation => "Knowledge Distillation",
            Technique::HuffmanCoding => "Huffman Coding",
        }
    }

    /// One-line description shown on the helper screen and by `techniques`
    pub fn blurb(&self) -> &'static str {
        match self {
            Technique::Pruning => {
                "Removes low-magnitude weights from dense and convolutional layers"
            }
            Technique::KnowledgeDistillation => {
                "Trains a smaller student network against the original model"
            }
            Technique::HuffmanCoding => {
                "Clusters shared weights and entropy-codes the cluster indices"
            }
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hardware the compressed model is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceTarget {
    #[default]
    Microcontroller,
    Fpga,
}

impl DeviceTarget {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceTarget::Microcontroller => "Microcontroller",
            DeviceTarget::Fpga => "FPGA",
        }
    }
}

impl fmt::Display for DeviceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pruning factors in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PruningParams {
    pub dense: i64,
    pub conv: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistillationParams {
    pub temperature: i64,
    /// Weight of the distillation loss, in percent
    pub alpha: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HuffmanParams {
    pub clusters_dense: i64,
    pub clusters_conv: i64,
}

/// Free-text fields entered on the start screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectFields {
    pub project_name: String,
    pub output_path: String,
    pub model_path: String,
    pub data_loader_path: String,
}

/// Configuration accumulated across all wizard screens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub project: ProjectFields,
    pub target: Option<DeviceTarget>,
    pub optimizations: BTreeSet<Technique>,
    pub pruning: Option<PruningParams>,
    pub distillation: Option<DistillationParams>,
    pub huffman: Option<HuffmanParams>,
}

impl WizardState {
    pub fn is_enabled(&self, technique: Technique) -> bool {
        self.optimizations.contains(&technique)
    }

    /// Enable or disable a technique. Committed parameters are kept so
    /// re-enabling restores them.
    pub fn toggle(&mut self, technique: Technique) {
        if !self.optimizations.remove(&technique) {
            self.optimizations.insert(technique);
        }
    }

    /// Enabled techniques in validation order
    pub fn enabled(&self) -> impl Iterator<Item = Technique> + '_ {
        self.optimizations.iter().copied()
    }

    /// Human-readable multi-line summary of the configuration
    pub fn summary_lines(&self) -> Vec<(String, String)> {
        let mut lines = vec![
            ("Project".to_string(), self.project.project_name.clone()),
            ("Output path".to_string(), self.project.output_path.clone()),
            ("Model path".to_string(), self.project.model_path.clone()),
            (
                "Data loader".to_string(),
                if self.project.data_loader_path.is_empty() {
                    "(none)".to_string()
                } else {
                    self.project.data_loader_path.clone()
                },
            ),
            (
                "Target".to_string(),
                self.target
                    .map(|t| t.label().to_string())
                    .unwrap_or_else(|| "(not selected)".to_string()),
            ),
        ];

        if self.optimizations.is_empty() {
            lines.push(("Techniques".to_string(), "(none)".to_string()));
        }

        for technique in self.enabled() {
            let detail = match technique {
                Technique::Pruning => self
                    .pruning
                    .map(|p| format!("dense {}%, conv {}%", p.dense, p.conv)),
                Technique::KnowledgeDistillation => self
                    .distillation
                    .map(|d| format!("temperature {}, alpha {}%", d.temperature, d.alpha)),
                Technique::HuffmanCoding => self.huffman.map(|h| {
                    format!(
                        "{} dense clusters, {} conv clusters",
                        h.clusters_dense, h.clusters_conv
                    )
                }),
            };
            lines.push((
                technique.label().to_string(),
                detail.unwrap_or_else(|| "(parameters missing)".to_string()),
            ));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_committed_params() {
        let mut state = WizardState::default();
        state.toggle(Technique::Pruning);
        assert!(state.is_enabled(Technique::Pruning));

        state.pruning = Some(PruningParams { dense: 20, conv: 10 });
        state.toggle(Technique::Pruning);
        assert!(!state.is_enabled(Technique::Pruning));
        assert_eq!(state.pruning, Some(PruningParams { dense: 20, conv: 10 }));
    }

    #[test]
    fn test_enabled_follows_validation_order() {
        let mut state = WizardState::default();
        state.toggle(Technique::HuffmanCoding);
        state.toggle(Technique::Pruning);
        state.toggle(Technique::KnowledgeDistillation);

        let order: Vec<_> = state.enabled().collect();
        assert_eq!(order, Technique::ALL.to_vec());
    }

    #[test]
    fn test_summary_marks_missing_params() {
        let mut state = WizardState::default();
        state.project.project_name = "P".to_string();
        state.toggle(Technique::HuffmanCoding);

        let lines = state.summary_lines();
        let huffman = lines.iter().find(|(k, _)| k == "Huffman Coding").unwrap();
        assert_eq!(huffman.1, "(parameters missing)");
        let loader = lines.iter().find(|(k, _)| k == "Data loader").unwrap();
        assert_eq!(loader.1, "(none)");
    }
}
