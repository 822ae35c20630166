//! The step-indexed wizard state machine.
//!
//! Single-threaded by construction: the wizard owns the draft for the whole
//! session and every transition is a plain method call. Validity is always
//! recomputed from the draft; the only cached UI state is the touched-field
//! set and the attempted-next flag, both purely presentational.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::step::{steps_for, unresolved_corporate_steps, Step, StepId};
use super::validators::{invalid_fields, is_step_valid, Field};
use crate::ids::UserId;
use crate::registration::{MembershipClass, OrganizationType, RegistrationDraft};

/// Interface language, carried explicitly instead of read from an ambient
/// locale provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
    Es,
    It,
}

/// Explicit session context handed to the wizard at construction.
#[derive(Debug, Clone, Default)]
pub struct WizardContext {
    /// Auth account of the current visitor, once registered.
    pub user_id: Option<UserId>,
    pub locale: Locale,
    pub class: MembershipClass,
    /// Organization type carried in from a landing-page query parameter;
    /// when set, the synthetic selection step is skipped entirely.
    pub preselected_organization: Option<OrganizationType>,
}

/// Result of an [`Wizard::advance`] attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step; touched-tracking and attempted-next reset.
    Advanced { to: StepId },
    /// Current step invalid; index unchanged, attempted-next now set so the
    /// listed fields render as errors.
    Rejected { invalid: Vec<Field> },
    /// Already on the review step; submission actions exit the wizard.
    AtFinalStep,
}

/// Multi-step registration wizard.
pub struct Wizard {
    context: WizardContext,
    draft: RegistrationDraft,
    index: usize,
    touched: BTreeSet<Field>,
    attempted_next: bool,
}

impl Wizard {
    pub fn new(context: WizardContext) -> Self {
        let draft = RegistrationDraft::new(context.class, context.preselected_organization);
        Self {
            context,
            draft,
            index: 0,
            touched: BTreeSet::new(),
            attempted_next: false,
        }
    }

    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Sole mutable access to the draft; there is exactly one writer.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    /// Current step list, derived from the draft's membership discriminant.
    /// Until a corporate draft has an organization type only the selection
    /// prologue exists.
    pub fn steps(&self) -> Vec<Step> {
        match self.draft.membership() {
            Some(membership) => {
                steps_for(membership, self.context.preselected_organization.is_some())
            }
            None => unresolved_corporate_steps(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Step {
        let steps = self.steps();
        steps[self.index.min(steps.len() - 1)]
    }

    pub fn attempted_next(&self) -> bool {
        self.attempted_next
    }

    /// Record that the user interacted with a field on the current step.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Whether `field` should render as an error right now: it is invalid on
    /// the current step and either touched or a next-attempt was rejected.
    pub fn shows_error(&self, field: Field) -> bool {
        (self.attempted_next || self.is_touched(field))
            && invalid_fields(self.current_step().id, &self.draft).contains(&field)
    }

    /// Attempt to move to the next step.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let steps = self.steps();
        let current = steps[self.index.min(steps.len() - 1)];

        let invalid = invalid_fields(current.id, &self.draft);
        if !invalid.is_empty() {
            self.attempted_next = true;
            return AdvanceOutcome::Rejected { invalid };
        }

        // The step list may have grown: selecting the organization type on
        // the synthetic first step swaps in the full list for that type.
        let steps = self.steps();
        if current.id == StepId::Review {
            return AdvanceOutcome::AtFinalStep;
        }

        // Leaving demographics bypasses the optional referral step.
        let next = if current.id == StepId::Demographics {
            steps
                .iter()
                .position(|s| s.id == StepId::Review)
                .unwrap_or(self.index + 1)
        } else {
            self.index + 1
        };

        self.index = next.min(steps.len() - 1);
        self.reset_step_ui_state();
        AdvanceOutcome::Advanced {
            to: steps[self.index].id,
        }
    }

    /// Move back one step. Always permitted, clamped at the first step, and
    /// never validates.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.reset_step_ui_state();
    }

    /// Whether the sidebar may jump straight to `position`: any step at or
    /// before the current one, or any step all of whose preceding required
    /// steps validate against the current draft.
    pub fn can_jump_to(&self, position: usize) -> bool {
        let steps = self.steps();
        if position >= steps.len() {
            return false;
        }
        if position <= self.index {
            return true;
        }
        steps[..position]
            .iter()
            .filter(|s| s.required)
            .all(|s| is_step_valid(s.id, &self.draft))
    }

    pub fn jump_to(&mut self, position: usize) -> bool {
        if !self.can_jump_to(position) {
            return false;
        }
        self.index = position;
        self.reset_step_ui_state();
        true
    }

    fn reset_step_ui_state(&mut self) {
        self.touched.clear();
        self.attempted_next = false;
    }
}
