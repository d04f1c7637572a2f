mod credentials;

pub use credentials::CredentialCache;
pub use credentials::CredentialProvider;
