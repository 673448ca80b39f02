// =============================================================================
// IgniteX Web - Page Components
// =============================================================================

pub mod home;

pub use home::HomePage;
