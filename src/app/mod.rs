// Application layer - Use case interactors

pub mod container;
pub mod inspect_interactor;
pub mod trim_interactor;

// Re-export interactors
pub use container::AppContainer;
pub use inspect_interactor::InspectInteractor;
pub use trim_interactor::TrimInteractor;
