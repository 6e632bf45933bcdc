use std::time::Duration;

const DEFAULT_WEBHOOK_URL: &str = "https://n8n.loreo.app/webhook/JoinWaitList";

/// Number of decorative stars drawn behind the page.
pub const STAR_COUNT: usize = 15;

/// Webhook that receives waitlist signups. Override at build time with
/// `LOREO_WEBHOOK_URL`.
pub fn get_webhook_url() -> &'static str {
    option_env!("LOREO_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

/// Delays driving the success banner after an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTimings {
    /// From the optimistic reset until the banner shows.
    pub show_after: Duration,
    /// How long the banner stays up once shown.
    pub visible_for: Duration,
}

impl Default for BannerTimings {
    fn default() -> Self {
        Self {
            show_after: Duration::from_millis(300),
            visible_for: Duration::from_millis(5000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_match_banner_schedule() {
        let timings = BannerTimings::default();
        assert_eq!(timings.show_after.as_millis(), 300);
        assert_eq!(timings.visible_for.as_millis(), 5000);
    }

    #[test]
    fn webhook_url_is_https() {
        assert!(get_webhook_url().starts_with("https://"));
    }
}
