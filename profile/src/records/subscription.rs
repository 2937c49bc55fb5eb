//! Metadata of a subscription that populates a group of profiles.

use crate::record::record;

record! {
    /// Where a group's profiles come from and how they are refreshed.
    pub struct Subscription {
        const KIND = Subscription;
        const VERSION = 1;

        link: String = String::new();
        /// Bearer token sent with update requests.
        token: String;
        force_resolve: bool = false;
        deduplication: bool = false;
        update_when_connected_only: bool = false;
        /// Overrides the default user agent.
        custom_user_agent: String;
        auto_update: bool = false;
        /// Minutes between automatic updates.
        auto_update_delay: u32 = 1440;
        /// Unix seconds of the last successful update.
        last_updated: u64 = 0;
        bytes_used: u64 = 0;
        bytes_remaining: u64 = 0;
        /// Unix seconds, zero when the subscription does not expire.
        expiry_date: u64 = 0;
        /// Raw `subscription-userinfo` header of the last update.
        user_info: String = String::new();
        /// Regular expression; matching profiles are dropped on update.
        name_filter: String = String::new(), since 1;
    }
}

impl Subscription {
    /// Returns the total traffic allowance in bytes, if known.
    pub fn bytes_total(&self) -> Option<u64> {
        match (self.bytes_used?, self.bytes_remaining?) {
            (0, 0) => None,
            (used, remaining) => used.checked_add(remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Record};

    #[test]
    fn test_optional_text() {
        let subscription = Subscription {
            link: Some("https://sub.example.org/feed".into()),
            custom_user_agent: Some("waypoint/1".into()),
            ..Default::default()
        };
        let mut decoded = Subscription::default();
        assert!(decoded
            .read(&mut subscription.encode(), &Config::default())
            .is_complete());
        assert_eq!(decoded.token, None);
        assert_eq!(decoded.custom_user_agent.as_deref(), Some("waypoint/1"));
        assert_eq!(decoded.auto_update_delay, Some(1440));
    }

    #[test]
    fn test_bytes_total() {
        let mut subscription = Subscription::default();
        assert_eq!(subscription.bytes_total(), None);
        subscription.fill_defaults();
        assert_eq!(subscription.bytes_total(), None);
        subscription.bytes_used = Some(10);
        subscription.bytes_remaining = Some(90);
        assert_eq!(subscription.bytes_total(), Some(100));
    }
}
