//! Background jobs driven by `tokio-cron-scheduler`.

pub mod revocation;
