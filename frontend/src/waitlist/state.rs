use std::rc::Rc;

use yew::Reducible;

use super::validation::{Field, SubmissionForm, ValidationErrors};

/// Identifies one accepted submission so its banner timers can be told apart
/// from those of a later one.
pub type Ticket = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerPhase {
    #[default]
    Idle,
    /// Form was reset, banner not shown yet.
    Resetting(Ticket),
    Visible(Ticket),
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WaitlistAction {
    Edit(Field, String),
    Rejected(ValidationErrors),
    Accepted(Ticket),
    ShowBanner(Ticket),
    HideBanner(Ticket),
}

/// Everything the waitlist section renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Waitlist {
    pub form: SubmissionForm,
    pub errors: ValidationErrors,
    pub banner: BannerPhase,
}

impl Waitlist {
    pub fn banner_visible(&self) -> bool {
        matches!(self.banner, BannerPhase::Visible(_))
    }

    fn latest_ticket(&self) -> Option<Ticket> {
        match self.banner {
            BannerPhase::Resetting(ticket) | BannerPhase::Visible(ticket) => Some(ticket),
            BannerPhase::Idle | BannerPhase::Done => None,
        }
    }

    pub fn apply(&mut self, action: WaitlistAction) {
        match action {
            WaitlistAction::Edit(field, value) => {
                match field {
                    Field::FullName => self.form.full_name = value,
                    Field::Email => self.form.email = value,
                }
                self.errors.clear(field);
            }
            WaitlistAction::Rejected(errors) => self.errors = errors,
            WaitlistAction::Accepted(ticket) => {
                self.form = SubmissionForm::default();
                self.errors = ValidationErrors::default();
                self.banner = BannerPhase::Resetting(ticket);
            }
            WaitlistAction::ShowBanner(ticket) => {
                if self.banner == BannerPhase::Resetting(ticket) {
                    self.banner = BannerPhase::Visible(ticket);
                }
            }
            WaitlistAction::HideBanner(ticket) => {
                if self.latest_ticket() == Some(ticket) {
                    self.banner = BannerPhase::Done;
                }
            }
        }
    }
}

impl Reducible for Waitlist {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_both() -> Waitlist {
        let mut state = Waitlist::default();
        state.apply(WaitlistAction::Edit(Field::FullName, "A".into()));
        state.apply(WaitlistAction::Edit(Field::Email, "nope".into()));
        state.apply(WaitlistAction::Rejected(ValidationErrors { name: true, email: true }));
        state
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut state = rejected_both();

        // still invalid, but the error hides until the next submit
        state.apply(WaitlistAction::Edit(Field::FullName, "B".into()));
        assert!(!state.errors.name);
        assert!(state.errors.email);
        assert_eq!(state.form.full_name, "B");

        state.apply(WaitlistAction::Edit(Field::Email, "still nope".into()));
        assert!(state.errors.is_clean());
    }

    #[test]
    fn rejection_keeps_typed_values() {
        let state = rejected_both();
        assert_eq!(state.form.full_name, "A");
        assert_eq!(state.form.email, "nope");
        assert_eq!(state.banner, BannerPhase::Idle);
    }

    #[test]
    fn accepted_resets_form_and_walks_phases() {
        let mut state = rejected_both();
        state.apply(WaitlistAction::Accepted(1));
        assert_eq!(state.form, SubmissionForm::default());
        assert!(state.errors.is_clean());
        assert_eq!(state.banner, BannerPhase::Resetting(1));
        assert!(!state.banner_visible());

        state.apply(WaitlistAction::ShowBanner(1));
        assert!(state.banner_visible());

        state.apply(WaitlistAction::HideBanner(1));
        assert_eq!(state.banner, BannerPhase::Done);
        assert!(!state.banner_visible());
    }

    #[test]
    fn stale_ticket_does_not_hide_newer_banner() {
        let mut state = Waitlist::default();
        state.apply(WaitlistAction::Accepted(1));
        state.apply(WaitlistAction::ShowBanner(1));
        state.apply(WaitlistAction::Accepted(2));
        state.apply(WaitlistAction::HideBanner(1));
        assert_eq!(state.banner, BannerPhase::Resetting(2));

        state.apply(WaitlistAction::ShowBanner(2));
        state.apply(WaitlistAction::ShowBanner(1));
        assert_eq!(state.banner, BannerPhase::Visible(2));
    }

    #[test]
    fn show_after_done_is_ignored() {
        let mut state = Waitlist::default();
        state.apply(WaitlistAction::Accepted(1));
        state.apply(WaitlistAction::ShowBanner(1));
        state.apply(WaitlistAction::HideBanner(1));
        state.apply(WaitlistAction::ShowBanner(1));
        assert_eq!(state.banner, BannerPhase::Done);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(Waitlist::default());
        let next = state.clone().reduce(WaitlistAction::Accepted(7));
        assert_eq!(next.banner, BannerPhase::Resetting(7));
        assert_eq!(state.banner, BannerPhase::Idle);
    }
}
