use std::cell::Cell;
use std::time::Duration;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use yew::Callback;

use super::state::{Ticket, WaitlistAction};
use super::validation::{validate, SubmissionForm, ValidationErrors};
use crate::config::BannerTimings;
use crate::utils::webhook::{HttpWebhook, Signup, Webhook};

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. Scheduled tasks cannot be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Sequences an accepted submission: optimistic reset, delayed banner,
/// banner dismissal, and a webhook delivery that nobody waits on.
pub struct SubmissionOrchestrator<S, C, W> {
    scheduler: S,
    clock: C,
    webhook: W,
    timings: BannerTimings,
    last_ticket: Cell<Ticket>,
}

pub type BrowserOrchestrator = SubmissionOrchestrator<TimeoutScheduler, SystemClock, HttpWebhook>;

impl BrowserOrchestrator {
    pub fn for_browser() -> Self {
        Self::new(
            TimeoutScheduler,
            SystemClock,
            HttpWebhook::default(),
            BannerTimings::default(),
        )
    }
}

impl<S, C, W> SubmissionOrchestrator<S, C, W>
where
    S: Scheduler + Clone + 'static,
    C: Clock,
    W: Webhook,
{
    pub fn new(scheduler: S, clock: C, webhook: W, timings: BannerTimings) -> Self {
        Self {
            scheduler,
            clock,
            webhook,
            timings,
            last_ticket: Cell::new(0),
        }
    }

    /// Validates `form` and, when it passes, starts the submission flow.
    /// Failing fields are dispatched as `Rejected` and nothing else happens.
    pub fn submit(
        &self,
        form: &SubmissionForm,
        dispatch: Callback<WaitlistAction>,
    ) -> Result<Ticket, ValidationErrors> {
        let applicant = match validate(form) {
            Ok(applicant) => applicant,
            Err(errors) => {
                dispatch.emit(WaitlistAction::Rejected(errors));
                return Err(errors);
            }
        };

        let ticket = self.last_ticket.get() + 1;
        self.last_ticket.set(ticket);
        let submitted_at = self.clock.now();

        dispatch.emit(WaitlistAction::Accepted(ticket));
        self.schedule_banner(ticket, dispatch);
        self.webhook.deliver(Signup::new(applicant, submitted_at));

        Ok(ticket)
    }

    fn schedule_banner(&self, ticket: Ticket, dispatch: Callback<WaitlistAction>) {
        let scheduler = self.scheduler.clone();
        let visible_for = self.timings.visible_for;
        self.scheduler.schedule(
            self.timings.show_after,
            Box::new(move || {
                dispatch.emit(WaitlistAction::ShowBanner(ticket));
                scheduler.schedule(
                    visible_for,
                    Box::new(move || dispatch.emit(WaitlistAction::HideBanner(ticket))),
                );
            }),
        );
    }
}
