mod positive_input;

pub use positive_input::PositiveInput;
