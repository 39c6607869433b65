mod filesystem;
mod loader;
mod model;
mod registry;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{FileRegistryLoader, RegistryLoader};
pub use model::{DEFAULT_CONFIG_FILE, HookDeclaration, PreCommitConfig, RepoConfig};
pub use registry::{HookRegistry, HookSpec};
