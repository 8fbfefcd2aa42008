pub mod dashboard;
pub mod home;
pub mod lock_events;
pub mod locks;
pub mod login;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use lock_events::LockEventsPage;
pub use locks::LocksPage;
pub use login::LoginPage;
