// Signing log table definition, applied at startup by Database::run_migrations

pub const SIGNINGLOG_SCHEMA: &str = include_str!("../../migrations/001_signinglog.sql");
