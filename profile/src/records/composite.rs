//! Profiles composed of other profiles.
//!
//! Members are referenced by their stored identifier, never embedded. Rejecting cycles (a chain
//! that contains itself, directly or through a set) is left to whoever assembles the profile.

use super::SetManagement;
use crate::record::record;

record! {
    /// Traffic flows through every member, in order.
    pub struct Chain {
        const KIND = Chain;
        const VERSION = 0;

        name: String = String::new();
        proxies: Vec<u64> = Vec::new();
    }
}

record! {
    /// A group of profiles from which one is picked at a time.
    pub struct ProxySet {
        const KIND = ProxySet;
        const VERSION = 0;

        name: String = String::new();
        management: SetManagement = SetManagement::Selector;
        /// Explicit members.
        proxies: Vec<u64> = Vec::new();
        /// Members are taken from this group instead, when set.
        group: u64;
        /// Regular expression filtering group members by name.
        group_filter: String = String::new();
        test_url: String = "https://www.gstatic.com/generate_204".into();
        /// Seconds between URL tests.
        test_interval: u32 = 180;
        /// Milliseconds of latency difference before switching.
        test_tolerance: u32 = 50;
        interrupt_exist_connections: bool = false;
    }
}
