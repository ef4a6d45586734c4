pub mod scaler;
pub mod window;
