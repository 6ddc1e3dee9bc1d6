mod interactive_counter;

pub use self::interactive_counter::InteractiveCounter;
