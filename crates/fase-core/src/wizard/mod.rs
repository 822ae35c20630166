//! The multi-step registration wizard: step lists, validators, and the
//! forward/back state machine.

mod machine;
mod step;
mod validators;

pub use machine::{AdvanceOutcome, Locale, Wizard, WizardContext};
pub use step::{steps_for, Step, StepId};
pub use validators::{invalid_fields, is_step_valid, is_valid_email, Field, MIN_PASSWORD_LEN};
