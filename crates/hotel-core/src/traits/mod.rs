//! Traits (ports) through which external records enter the domain

mod user_record;

pub use user_record::UserRecord;
