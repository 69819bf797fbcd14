//! Wizard screens as plain data: fields, toggles and bound controls
//!
//! A screen is rebuilt from [`WizardState`] on every successful transition
//! and knows nothing about rendering.

use super::fields::{technique_fields, FieldId, Form, PROJECT_FIELDS};
use super::navigation::Transition;
use super::state::{DeviceTarget, Technique, WizardState};

/// Wizard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Project name and paths
    Start,
    /// Deployment target selection
    Target,
    /// Technique toggles and parameters
    Optimization,
    /// Informational detour explaining the targets
    Helper,
    /// Review before finishing
    Summary,
}

impl ScreenId {
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Start => "Project Setup",
            ScreenId::Target => "Select Target",
            ScreenId::Optimization => "Optimizations",
            ScreenId::Helper => "Which Target?",
            ScreenId::Summary => "Review",
        }
    }

    /// Position in the main flow; the helper detour has none
    pub fn step(&self) -> Option<u8> {
        match self {
            ScreenId::Start => Some(1),
            ScreenId::Target => Some(2),
            ScreenId::Optimization => Some(3),
            ScreenId::Summary => Some(4),
            ScreenId::Helper => None,
        }
    }
}

pub const STEP_COUNT: u8 = 4;

/// A clickable control bound to the transition it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub transition: Transition,
}

impl Control {
    pub const fn new(label: &'static str, transition: Transition) -> Self {
        Self { label, transition }
    }
}

/// Something on a screen that can receive focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Field(FieldId),
    Toggle(Technique),
    Control(Control),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: ScreenId,
    pub form: Form,
    pub items: Vec<Item>,
    pub focus: usize,
}

impl Screen {
    /// Build a fresh screen pre-filled from accumulated state
    pub fn build(id: ScreenId, state: &WizardState) -> Self {
        let mut form = Form::new();
        let mut items = Vec::new();

        match id {
            ScreenId::Start => {
                let project = &state.project;
                let values = [
                    &project.project_name,
                    &project.output_path,
                    &project.model_path,
                    &project.data_loader_path,
                ];
                for (field, value) in PROJECT_FIELDS.into_iter().zip(values) {
                    form.set(field, value.as_str());
                    items.push(Item::Field(field));
                }
                items.push(Item::Control(Control::new("Next", Transition::StartNext)));
            }
            ScreenId::Target => {
                items.push(Item::Control(Control::new(
                    "Microcontroller",
                    Transition::TargetNext(DeviceTarget::Microcontroller),
                )));
                items.push(Item::Control(Control::new(
                    "FPGA",
                    Transition::TargetNext(DeviceTarget::Fpga),
                )));
                items.push(Item::Control(Control::new("Don't know", Transition::TargetHelp)));
                items.push(Item::Control(Control::new("Back", Transition::TargetBack)));
            }
            ScreenId::Optimization => {
                for technique in Technique::ALL {
                    items.push(Item::Toggle(technique));
                    let committed = committed_values(state, technique);
                    for (field, value) in technique_fields(technique).into_iter().zip(committed) {
                        form.set(field, value.map(|v| v.to_string()).unwrap_or_default());
                        items.push(Item::Field(field));
                    }
                }
                items.push(Item::Control(Control::new("Back", Transition::OptimizationBack)));
                items.push(Item::Control(Control::new("Next", Transition::OptimizationNext)));
            }
            ScreenId::Helper => {
                items.push(Item::Control(Control::new("Back", Transition::HelperBack)));
            }
            ScreenId::Summary => {
                items.push(Item::Control(Control::new("Back", Transition::SummaryBack)));
                items.push(Item::Control(Control::new("Finish", Transition::Finish)));
            }
        }

        Self { id, form, items, focus: 0 }
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.items.iter().filter_map(|item| match item {
            Item::Control(control) => Some(control),
            _ => None,
        })
    }

    /// Control bound to the given transition, if this screen offers it
    pub fn control_for(&self, transition: Transition) -> Option<&Control> {
        self.controls().find(|c| c.transition == transition)
    }

    /// Transition triggered by Esc
    pub fn back_transition(&self) -> Option<Transition> {
        self.controls()
            .map(|c| c.transition)
            .find(|t| t.is_back())
    }

    pub fn focused(&self) -> Option<&Item> {
        self.items.get(self.focus)
    }

    /// Field under focus, if the focused item is a text field
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focused() {
            Some(Item::Field(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.items.is_empty() {
            self.focus = (self.focus + 1) % self.items.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.items.is_empty() {
            self.focus = (self.focus + self.items.len() - 1) % self.items.len();
        }
    }

    /// Move focus to a field; used to point at the field a warning refers to
    pub fn focus_field(&mut self, id: FieldId) {
        if let Some(pos) = self.items.iter().position(|item| *item == Item::Field(id)) {
            self.focus = pos;
        }
    }
}

fn committed_values(state: &WizardState, technique: Technique) -> [Option<i64>; 2] {
    match technique {
        Technique::Pruning => match state.pruning {
            Some(p) => [Some(p.dense), Some(p.conv)],
            None => [None, None],
        },
        Technique::KnowledgeDistillation => match state.distillation {
            Some(d) => [Some(d.temperature), Some(d.alpha)],
            None => [None, None],
        },
        Technique::HuffmanCoding => match state.huffman {
            Some(h) => [Some(h.clusters_dense), Some(h.clusters_conv)],
            None => [None, None],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::PruningParams;

    #[test]
    fn test_start_prefills_from_state() {
        let mut state = WizardState::default();
        state.project.project_name = "kws".to_string();
        state.project.output_path = "/out".to_string();

        let screen = Screen::build(ScreenId::Start, &state);
        assert_eq!(screen.form.text(FieldId::ProjectName), "kws");
        assert_eq!(screen.form.text(FieldId::OutputPath), "/out");
        assert_eq!(screen.focused_field(), Some(FieldId::ProjectName));
        assert!(screen.control_for(Transition::StartNext).is_some());
        assert_eq!(screen.back_transition(), None);
    }

    #[test]
    fn test_target_controls_bound() {
        let screen = Screen::build(ScreenId::Target, &WizardState::default());
        let transitions: Vec<_> = screen.controls().map(|c| c.transition).collect();
        assert_eq!(
            transitions,
            vec![
                Transition::TargetNext(DeviceTarget::Microcontroller),
                Transition::TargetNext(DeviceTarget::Fpga),
                Transition::TargetHelp,
                Transition::TargetBack,
            ]
        );
        assert_eq!(screen.back_transition(), Some(Transition::TargetBack));
    }

    #[test]
    fn test_optimization_prefills_committed_params() {
        let mut state = WizardState::default();
        state.pruning = Some(PruningParams { dense: 30, conv: 5 });

        let screen = Screen::build(ScreenId::Optimization, &state);
        assert_eq!(screen.form.text(FieldId::PruningDense), "30");
        assert_eq!(screen.form.text(FieldId::PruningConv), "5");
        assert_eq!(screen.form.text(FieldId::HuffmanDense), "");
        assert_eq!(screen.focused(), Some(&Item::Toggle(Technique::Pruning)));
    }

    #[test]
    fn test_focus_wraps() {
        let mut screen = Screen::build(ScreenId::Summary, &WizardState::default());
        assert_eq!(screen.items.len(), 2);
        screen.focus_prev();
        assert_eq!(screen.focus, 1);
        screen.focus_next();
        assert_eq!(screen.focus, 0);
    }

    #[test]
    fn test_focus_field() {
        let mut screen = Screen::build(ScreenId::Optimization, &WizardState::default());
        screen.focus_field(FieldId::HuffmanConv);
        assert_eq!(screen.focused_field(), Some(FieldId::HuffmanConv));
    }
}
