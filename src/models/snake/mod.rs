//! Model layer of the snake game: body, input buffering, clock and the controller.

pub mod apple;
pub mod drawing_surface;
pub mod game_clock;
pub mod game_grid;
pub mod input_queue;
pub mod position;
pub mod snake_body;
pub mod snake_config;
pub mod snake_game;
