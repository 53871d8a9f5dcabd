pub mod movie_provider_repo;

pub use movie_provider_repo::MovieProviderRepository;
