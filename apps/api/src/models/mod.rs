pub mod profile;
pub mod record;
pub mod schedule;
pub mod suggestion;
