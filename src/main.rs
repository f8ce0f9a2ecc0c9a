use leptos::logging::error;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = volunteer_web::start() {
        error!("Failed to start page script: {err}");
    }
}
