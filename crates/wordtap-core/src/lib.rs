pub mod behavior;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod mux;
pub mod normalize;
pub mod selection;
pub mod transport;
