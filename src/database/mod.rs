pub mod activities_repo;
pub mod activities_seed;
