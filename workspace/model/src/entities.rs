//! Root of the SeaORM entity modules for the supply planning store.

pub mod scenario;
pub mod user_config;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::scenario::Entity as Scenario;
    pub use super::user_config::Entity as UserConfig;
}
