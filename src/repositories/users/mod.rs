//! 사용자 리포지토리

pub mod user_repo;

pub use user_repo::UserRepository;
