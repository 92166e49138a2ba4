/// Credential handling for forum-service
pub mod password;
