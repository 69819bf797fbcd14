//! Transition dispatch between wizard screens

use super::fields::extract_project_fields;
use super::screen::{Screen, ScreenId};
use super::state::{DeviceTarget, WizardState};
use super::validate::{commit_technique_params, require_project_fields, ValidationError};

/// Navigation direction; decides which validation pass runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Every edge of the wizard's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Start -> Target, copying the project fields
    StartNext,
    /// Target -> Start
    TargetBack,
    /// Target -> Optimization for the chosen device
    TargetNext(DeviceTarget),
    /// Target -> Helper
    TargetHelp,
    /// Helper -> Target
    HelperBack,
    /// Optimization -> Target, committing technique parameters
    OptimizationBack,
    /// Optimization -> Summary, committing technique parameters
    OptimizationNext,
    /// Summary -> Optimization
    SummaryBack,
    /// Summary -> wizard complete
    Finish,
}

impl Transition {
    pub fn direction(&self) -> Direction {
        match self {
            Transition::StartNext
            | Transition::TargetNext(_)
            | Transition::TargetHelp
            | Transition::OptimizationNext
            | Transition::Finish => Direction::Forward,
            Transition::TargetBack
            | Transition::HelperBack
            | Transition::OptimizationBack
            | Transition::SummaryBack => Direction::Back,
        }
    }

    pub fn is_back(&self) -> bool {
        self.direction() == Direction::Back
    }

    /// Screen the transition leaves from
    pub fn source(&self) -> ScreenId {
        match self {
            Transition::StartNext => ScreenId::Start,
            Transition::TargetBack | Transition::TargetNext(_) | Transition::TargetHelp => {
                ScreenId::Target
            }
            Transition::HelperBack => ScreenId::Helper,
            Transition::OptimizationBack | Transition::OptimizationNext => ScreenId::Optimization,
            Transition::SummaryBack | Transition::Finish => ScreenId::Summary,
        }
    }

    /// Screen the transition arrives at; `None` once the wizard is complete
    pub fn destination(&self) -> Option<ScreenId> {
        match self {
            Transition::TargetBack => Some(ScreenId::Start),
            Transition::StartNext | Transition::HelperBack | Transition::OptimizationBack => {
                Some(ScreenId::Target)
            }
            Transition::TargetNext(_) | Transition::SummaryBack => Some(ScreenId::Optimization),
            Transition::TargetHelp => Some(ScreenId::Helper),
            Transition::OptimizationNext => Some(ScreenId::Summary),
            Transition::Finish => None,
        }
    }

    /// Whether leaving reads technique parameters from the optimization screen
    fn commits_parameters(&self) -> bool {
        matches!(self, Transition::OptimizationBack | Transition::OptimizationNext)
    }
}

/// Successful transition outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the displayed screen with this one
    Show(Screen),
    /// The user finished the wizard
    Complete,
    /// The transition is not bound on the leaving screen; nothing changed
    Stay,
}

/// Run extraction and validation for `transition`, then build the next screen.
///
/// Transitions without a control on `leaving` are ignored and yield
/// [`Navigation::Stay`]. On error the caller keeps displaying `leaving`. State changes made before
/// the failing check (extracted text, earlier technique parameters) remain.
pub fn dispatch(
    state: &mut WizardState,
    leaving: &Screen,
    transition: Transition,
) -> Result<Navigation, ValidationError> {
    if leaving.control_for(transition).is_none() {
        tracing::warn!(
            ?transition,
            screen = ?leaving.id,
            expected = ?transition.source(),
            "transition not bound on this screen"
        );
        return Ok(Navigation::Stay);
    }

    if transition == Transition::StartNext {
        extract_project_fields(&leaving.form, state);
    }

    if transition.direction() == Direction::Forward {
        require_project_fields(state)?;
    }

    if transition.commits_parameters() {
        commit_technique_params(&leaving.form, state)?;
    }

    if let Transition::TargetNext(target) = transition {
        state.target = Some(target);
    }

    let Some(next) = transition.destination() else {
        tracing::info!(project = %state.project.project_name, "wizard complete");
        return Ok(Navigation::Complete);
    };

    if next == ScreenId::Target {
        tracing::info!(model_path = %state.project.model_path, "model");
        tracing::info!(data_loader_path = %state.project.data_loader_path, "data loader");
    }

    tracing::debug!(from = ?leaving.id, to = ?next, "transition");
    Ok(Navigation::Show(Screen::build(next, state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::fields::FieldId;
    use crate::wizard::state::{HuffmanParams, PruningParams, Technique};

    fn start_screen(name: &str, model: &str, output: &str) -> Screen {
        let mut screen = Screen::build(ScreenId::Start, &WizardState::default());
        screen.form.set(FieldId::ProjectName, name);
        screen.form.set(FieldId::ModelPath, model);
        screen.form.set(FieldId::OutputPath, output);
        screen
    }

    fn shown(nav: Navigation) -> Screen {
        match nav {
            Navigation::Show(screen) => screen,
            other => panic!("expected a screen, got {:?}", other),
        }
    }

    fn configured_state() -> WizardState {
        let mut state = WizardState::default();
        state.project.project_name = "P".to_string();
        state.project.model_path = "M".to_string();
        state.project.output_path = "O".to_string();
        state
    }

    #[test]
    fn test_start_next_missing_name_aborts() {
        let mut state = WizardState::default();
        let leaving = start_screen("", "x", "y");

        let err = dispatch(&mut state, &leaving, Transition::StartNext).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField { field: FieldId::ProjectName });
        // extraction already happened
        assert_eq!(state.project.model_path, "x");
        assert_eq!(state.project.output_path, "y");
    }

    #[test]
    fn test_start_next_shows_target() {
        let mut state = WizardState::default();
        let leaving = start_screen("P", "M", "O");

        let next = shown(dispatch(&mut state, &leaving, Transition::StartNext).unwrap());
        assert_eq!(next.id, ScreenId::Target);
        assert!(next.control_for(Transition::TargetHelp).is_some());
        assert_eq!(state.project.project_name, "P");
    }

    #[test]
    fn test_target_next_records_device() {
        let mut state = configured_state();
        let leaving = Screen::build(ScreenId::Target, &state);

        let next = shown(
            dispatch(&mut state, &leaving, Transition::TargetNext(DeviceTarget::Fpga)).unwrap(),
        );
        assert_eq!(next.id, ScreenId::Optimization);
        assert_eq!(state.target, Some(DeviceTarget::Fpga));
    }

    #[test]
    fn test_forward_from_target_requires_project_fields() {
        let mut state = configured_state();
        state.project.model_path.clear();
        let leaving = Screen::build(ScreenId::Target, &state);

        let err = dispatch(&mut state, &leaving, Transition::TargetHelp).unwrap_err();
        assert_eq!(err.field(), FieldId::ModelPath);
    }

    #[test]
    fn test_back_skips_required_check() {
        let mut state = WizardState::default();
        let leaving = Screen::build(ScreenId::Target, &state);

        let next = shown(dispatch(&mut state, &leaving, Transition::TargetBack).unwrap());
        assert_eq!(next.id, ScreenId::Start);
    }

    #[test]
    fn test_optimization_back_invalid_pruning() {
        let mut state = configured_state();
        state.toggle(Technique::Pruning);
        let mut leaving = Screen::build(ScreenId::Optimization, &state);
        leaving.form.set(FieldId::PruningDense, "abc");

        let err = dispatch(&mut state, &leaving, Transition::OptimizationBack).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a number for pruning or disable it.");
        assert_eq!(state.pruning, None);
    }

    #[test]
    fn test_optimization_back_partial_commit() {
        let mut state = configured_state();
        state.toggle(Technique::Pruning);
        state.toggle(Technique::HuffmanCoding);
        let mut leaving = Screen::build(ScreenId::Optimization, &state);
        leaving.form.set(FieldId::PruningDense, "4");
        leaving.form.set(FieldId::PruningConv, "8");
        leaving.form.set(FieldId::HuffmanDense, "not a number");

        let err = dispatch(&mut state, &leaving, Transition::OptimizationBack).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidNumericParameter { technique: Technique::HuffmanCoding, .. }
        ));
        assert_eq!(state.pruning, Some(PruningParams { dense: 4, conv: 8 }));
        assert_eq!(state.huffman, None);
    }

    #[test]
    fn test_optimization_next_to_summary_and_finish() {
        let mut state = configured_state();
        state.toggle(Technique::HuffmanCoding);
        let mut leaving = Screen::build(ScreenId::Optimization, &state);
        leaving.form.set(FieldId::HuffmanDense, "16");
        leaving.form.set(FieldId::HuffmanConv, "32");

        let summary = shown(dispatch(&mut state, &leaving, Transition::OptimizationNext).unwrap());
        assert_eq!(summary.id, ScreenId::Summary);
        assert_eq!(
            state.huffman,
            Some(HuffmanParams { clusters_dense: 16, clusters_conv: 32 })
        );

        let done = dispatch(&mut state, &summary, Transition::Finish).unwrap();
        assert_eq!(done, Navigation::Complete);
    }

    #[test]
    fn test_helper_round_trip() {
        let mut state = configured_state();
        let target = Screen::build(ScreenId::Target, &state);

        let helper = shown(dispatch(&mut state, &target, Transition::TargetHelp).unwrap());
        assert_eq!(helper.id, ScreenId::Helper);
        assert_eq!(helper.back_transition(), Some(Transition::HelperBack));

        let back = shown(dispatch(&mut state, &helper, Transition::HelperBack).unwrap());
        assert_eq!(back.id, ScreenId::Target);
    }

    #[test]
    fn test_unbound_transition_changes_nothing() {
        let mut state = WizardState::default();
        let start = start_screen("", "", "");

        for transition in [Transition::HelperBack, Transition::Finish, Transition::TargetHelp] {
            let nav = dispatch(&mut state, &start, transition).unwrap();
            assert_eq!(nav, Navigation::Stay);
        }
        assert_eq!(state, WizardState::default());

        let mut state = configured_state();
        state.toggle(Technique::Pruning);
        let before = state.clone();
        let mut summary = Screen::build(ScreenId::Summary, &state);
        summary.form.set(FieldId::PruningDense, "abc");

        let nav = dispatch(&mut state, &summary, Transition::OptimizationBack).unwrap();
        assert_eq!(nav, Navigation::Stay);
        assert_eq!(state, before);
    }

    #[test]
    fn test_every_transition_has_matching_source_control() {
        let state = configured_state();
        let all = [
            Transition::StartNext,
            Transition::TargetBack,
            Transition::TargetNext(DeviceTarget::Microcontroller),
            Transition::TargetNext(DeviceTarget::Fpga),
            Transition::TargetHelp,
            Transition::HelperBack,
            Transition::OptimizationBack,
            Transition::OptimizationNext,
            Transition::SummaryBack,
            Transition::Finish,
        ];
        for transition in all {
            let screen = Screen::build(transition.source(), &state);
            assert!(
                screen.control_for(transition).is_some(),
                "{:?} has no control on {:?}",
                transition,
                screen.id
            );
        }
    }
}
