//! CharSeed Seeder - populates a Character Sheet Manager backend with the
//! sample dataset over its REST API.

pub mod config;
pub mod infrastructure;
pub mod seeding;

pub use config::SeederConfig;
pub use seeding::{SeedReport, Seeder};
