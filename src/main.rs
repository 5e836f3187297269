use oronno_portal::dashboard;
use oronno_portal::state::PortalState;

fn main() {
    env_logger::init();

    let state = PortalState::with_seed_data();
    match dashboard::snapshot(&state) {
        Ok(snap) => match serde_json::to_string_pretty(&snap) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize dashboard snapshot: {e}"),
        },
        Err(e) => log::error!("Failed to build dashboard snapshot: {e}"),
    }
}
