pub mod clock;
pub mod upstream;
