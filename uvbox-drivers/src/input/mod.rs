//! Front-panel button and lid switch drivers

pub mod buttons;
pub mod lid;

pub use buttons::ButtonBank;
pub use lid::LidSwitch;
