pub use super::affair::Entity as Affair;
pub use super::assignment::Entity as Assignment;
pub use super::attorney::Entity as Attorney;
pub use super::client::Entity as Client;
