#![allow(dead_code)]

pub mod config_env;
pub mod http_stub;

use std::time::{Duration, Instant};

use aed_client::egui_app::controller::SessionController;

/// Poll the controller until every started job has been applied.
pub fn settle(controller: &mut SessionController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.poll_background_jobs();
        if !controller.has_pending_jobs() {
            return;
        }
        assert!(Instant::now() < deadline, "background jobs did not settle");
        std::thread::sleep(Duration::from_millis(5));
    }
}
