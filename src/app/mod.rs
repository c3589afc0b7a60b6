// Application layer - Use case interactors

pub mod container;
pub mod rename_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use rename_interactor::RenameInteractor;
