pub mod generator;
pub mod handlers;
pub mod next_steps;
pub mod progress;
pub mod transitions;
