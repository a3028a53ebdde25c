pub mod action;
pub mod derived;
pub mod port;
pub mod statechart;
pub mod timing;

pub use action::{extend, extend_all, Action};
pub use statechart::{ElementRef, StatechartInstance, StatechartModel};
