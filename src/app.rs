use std::time::{Duration, Instant};

use crate::config::Config;
use crate::wizard::{dispatch, Item, Navigation, Screen, ScreenId, Transition, ValidationError, WizardState};

/// Buttons on the warning dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningButton {
    #[default]
    Ok,
    Cancel,
}

/// Modal warning shown when a transition is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: &'static str,
    pub message: String,
    pub selected: WarningButton,
}

impl From<&ValidationError> for Warning {
    fn from(err: &ValidationError) -> Self {
        Self {
            title: "Warning",
            message: err.to_string(),
            selected: WarningButton::Ok,
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Configuration accumulated by the wizard
    pub state: WizardState,
    /// Currently displayed screen
    pub screen: Screen,
    /// Open warning dialog; blocks all other input
    pub warning: Option<Warning>,
    /// Key bindings overlay
    pub show_keys: bool,
    /// Status message
    pub status_message: Option<String>,
    /// When status message was set (for auto-clearing)
    pub status_time: Option<Instant>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set once the user finishes the wizard
    pub completed: bool,
}

impl App {
    /// Create the app showing the start screen, pre-filled from `state`
    pub fn new(config: Config, state: WizardState) -> Self {
        let screen = Screen::build(ScreenId::Start, &state);
        Self {
            config,
            state,
            screen,
            warning: None,
            show_keys: false,
            status_message: None,
            status_time: None,
            should_quit: false,
            completed: false,
        }
    }

    /// Attempt a transition from the current screen.
    ///
    /// On a validation failure the screen stays put and a warning opens.
    pub fn trigger(&mut self, transition: Transition) {
        match dispatch(&mut self.state, &self.screen, transition) {
            Ok(Navigation::Show(next)) => {
                self.screen = next;
                self.clear_status();
            }
            Ok(Navigation::Complete) => {
                self.completed = true;
                self.should_quit = true;
            }
            Ok(Navigation::Stay) => {}
            Err(e) => {
                tracing::info!(?transition, error = %e, "transition rejected");
                self.screen.focus_field(e.field());
                self.warning = Some(Warning::from(&e));
            }
        }
    }

    /// Enter on the focused item: fire a control, flip a toggle,
    /// or move on from a field
    pub fn activate_focused(&mut self) {
        match self.screen.focused().copied() {
            Some(Item::Control(control)) => self.trigger(control.transition),
            Some(Item::Toggle(technique)) => self.toggle_technique(technique),
            Some(Item::Field(_)) => self.screen.focus_next(),
            None => {}
        }
    }

    /// Space on a toggle; typed into a field otherwise
    pub fn space(&mut self) {
        match self.screen.focused().copied() {
            Some(Item::Toggle(technique)) => self.toggle_technique(technique),
            Some(Item::Field(_)) => self.type_char(' '),
            _ => {}
        }
    }

    fn toggle_technique(&mut self, technique: crate::wizard::Technique) {
        self.state.toggle(technique);
        let verb = if self.state.is_enabled(technique) { "enabled" } else { "disabled" };
        tracing::debug!(%technique, verb, "technique toggled");
        self.set_status(format!("{} {}", technique, verb));
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.screen.focused_field() {
            if let Some(buffer) = self.screen.form.buffer_mut(field) {
                buffer.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.screen.focused_field() {
            if let Some(buffer) = self.screen.form.buffer_mut(field) {
                buffer.pop();
            }
        }
    }

    /// Esc: back transition, or quit from the first screen
    pub fn go_back(&mut self) {
        match self.screen.back_transition() {
            Some(transition) => self.trigger(transition),
            None => self.should_quit = true,
        }
    }

    /// Close the warning; OK and Cancel both just abort the transition
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    pub fn toggle_warning_button(&mut self) {
        if let Some(ref mut warning) = self.warning {
            warning.selected = match warning.selected {
                WarningButton::Ok => WarningButton::Cancel,
                WarningButton::Cancel => WarningButton::Ok,
            };
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_time = None;
    }

    /// Check and clear status if expired (call in event loop)
    pub fn check_status_expiry(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() >= Duration::from_secs(self.config.status_timeout_secs) {
                self.clear_status();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::PruningParams;
    use crate::wizard::{DeviceTarget, FieldId, Technique};

    fn app() -> App {
        App::new(Config::default(), WizardState::default())
    }

    fn fill_start(app: &mut App, name: &str, model: &str, output: &str) {
        app.screen.form.set(FieldId::ProjectName, name);
        app.screen.form.set(FieldId::ModelPath, model);
        app.screen.form.set(FieldId::OutputPath, output);
    }

    fn at_optimization(techniques: &[Technique]) -> App {
        let mut app = app();
        fill_start(&mut app, "P", "M", "O");
        app.trigger(Transition::StartNext);
        app.trigger(Transition::TargetNext(DeviceTarget::Microcontroller));
        for t in techniques {
            app.state.toggle(*t);
        }
        assert_eq!(app.screen.id, ScreenId::Optimization);
        app
    }

    #[test]
    fn test_missing_project_name_keeps_screen_and_warns() {
        let mut app = app();
        fill_start(&mut app, "", "x", "y");
        let before = app.screen.id;

        app.trigger(Transition::StartNext);

        assert_eq!(app.screen.id, before);
        let warning = app.warning.as_ref().expect("warning shown");
        assert_eq!(warning.title, "Warning");
        assert_eq!(warning.message, "Please enter your data");
        assert_eq!(app.screen.focused_field(), Some(FieldId::ProjectName));
    }

    #[test]
    fn test_required_fields_present_shows_target() {
        let mut app = app();
        fill_start(&mut app, "P", "M", "O");

        app.trigger(Transition::StartNext);

        assert!(app.warning.is_none());
        assert_eq!(app.screen.id, ScreenId::Target);
        assert!(app
            .screen
            .control_for(Transition::TargetNext(DeviceTarget::Fpga))
            .is_some());
    }

    #[test]
    fn test_typed_text_reaches_state() {
        let mut app = app();
        for c in "kws".chars() {
            app.type_char(c);
        }
        app.backspace();
        app.space();
        assert_eq!(app.screen.form.text(FieldId::ProjectName), "kw ");

        app.screen.form.set(FieldId::ModelPath, "M");
        app.screen.form.set(FieldId::OutputPath, "O");
        app.trigger(Transition::StartNext);
        assert_eq!(app.state.project.project_name, "kw ");
    }

    #[test]
    fn test_invalid_pruning_on_back() {
        let mut app = at_optimization(&[Technique::Pruning]);
        app.screen.form.set(FieldId::PruningDense, "abc");

        app.trigger(Transition::OptimizationBack);

        assert_eq!(app.screen.id, ScreenId::Optimization);
        assert_eq!(
            app.warning.as_ref().map(|w| w.message.as_str()),
            Some("Please enter a number for pruning or disable it.")
        );
        assert_eq!(app.state.pruning, None);
        assert_eq!(app.screen.focused_field(), Some(FieldId::PruningDense));
    }

    #[test]
    fn test_partial_commit_on_back() {
        let mut app = at_optimization(&[Technique::Pruning, Technique::HuffmanCoding]);
        app.screen.form.set(FieldId::PruningDense, "4");
        app.screen.form.set(FieldId::PruningConv, "8");
        app.screen.form.set(FieldId::HuffmanDense, "not a number");

        app.trigger(Transition::OptimizationBack);

        assert_eq!(app.screen.id, ScreenId::Optimization);
        assert!(app.warning.is_some());
        assert_eq!(app.state.pruning, Some(PruningParams { dense: 4, conv: 8 }));
        assert_eq!(app.state.huffman, None);
    }

    #[test]
    fn test_dismiss_then_retry() {
        let mut app = app();
        fill_start(&mut app, "", "M", "O");
        app.trigger(Transition::StartNext);
        app.toggle_warning_button();
        assert_eq!(app.warning.as_ref().map(|w| w.selected), Some(WarningButton::Cancel));
        app.dismiss_warning();
        assert!(app.warning.is_none());

        app.screen.form.set(FieldId::ProjectName, "P");
        app.trigger(Transition::StartNext);
        assert_eq!(app.screen.id, ScreenId::Target);
    }

    #[test]
    fn test_activate_toggle_and_finish() {
        let mut app = at_optimization(&[]);
        // focus starts on the pruning toggle
        app.activate_focused();
        assert!(app.state.is_enabled(Technique::Pruning));
        assert!(app.status_message.is_some());

        app.screen.form.set(FieldId::PruningDense, "10");
        app.screen.form.set(FieldId::PruningConv, "20");
        app.trigger(Transition::OptimizationNext);
        assert_eq!(app.screen.id, ScreenId::Summary);

        app.trigger(Transition::Finish);
        assert!(app.completed);
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_transition_is_ignored() {
        let mut app = app();
        app.trigger(Transition::Finish);
        app.trigger(Transition::HelperBack);

        assert_eq!(app.screen.id, ScreenId::Start);
        assert!(app.warning.is_none());
        assert!(!app.completed);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_esc_on_start_quits() {
        let mut app = app();
        app.go_back();
        assert!(app.should_quit);
        assert!(!app.completed);
    }

    #[test]
    fn test_esc_follows_back_control() {
        let mut app = app();
        fill_start(&mut app, "P", "M", "O");
        app.trigger(Transition::StartNext);
        app.go_back();
        assert_eq!(app.screen.id, ScreenId::Start);
        assert_eq!(app.screen.form.text(FieldId::ProjectName), "P");
    }
}
