use log::debug;
use tilesnake::app::State;

fn main() -> iced::Result {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "tilesnake=debug");
    }
    env_logger::init();
    debug!("Debug on");
    iced::application("Tile Snake", State::update, State::view)
        .window_size(iced::Size::new(900.0, 900.0))
        .subscription(State::subscription)
        .run()
}
