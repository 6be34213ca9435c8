pub mod activities_repo;
pub mod seed_data;

pub use activities_repo::{ActivityDirectory, ActivityStore};
