pub mod board_canvas;
pub mod snake_game_screen;
