pub mod platform;
pub mod waitlist_entry;
