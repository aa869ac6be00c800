//! Repository implementations backed by PostgreSQL.

pub mod presence;

pub use presence::PgPresenceRepository;
