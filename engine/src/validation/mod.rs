// Identifier checks applied to every loaded row.
pub mod cpf;
pub mod partition;

pub use cpf::{is_valid_cpf, normalize_cpf};
pub use partition::partition;
