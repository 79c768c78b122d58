//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in uvbox-core on top of the uvbox-hal pin traits:
//!
//! - Temperature sensor (NTC 10K thermistor)
//! - Front-panel buttons and lid switch
//! - Lamp, fan and indicator outputs
//! - Buzzer melodies

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod input;
pub mod output;
pub mod sensor;
