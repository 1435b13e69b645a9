pub use super::application::Entity as Application;
pub use super::auth_identity::Entity as AuthIdentity;
pub use super::job::Entity as Job;
pub use super::profile::Entity as Profile;
pub use super::saved_job::Entity as SavedJob;
pub use super::storage_object::Entity as StorageObject;
