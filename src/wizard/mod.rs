//! Wizard core: state, screens, validation and navigation
//!
//! Nothing in here touches the terminal; the UI layer renders [`Screen`]s
//! and feeds [`Transition`]s back into [`dispatch`].

pub mod fields;
pub mod navigation;
pub mod screen;
pub mod state;
pub mod validate;

pub use fields::FieldId;
pub use navigation::{dispatch, Navigation, Transition};
pub use screen::{Control, Item, Screen, ScreenId, STEP_COUNT};
pub use state::{DeviceTarget, Technique, WizardState};
pub use validate::ValidationError;
