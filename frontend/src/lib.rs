pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: logging, panic hook, then the router.
pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("Starting SkiLock frontend (api base: {})", config::api_base_url());
        router::mount_app();
    }
}
