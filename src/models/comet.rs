//! Cometary nucleus models.
//!
//! This module contains models for the surface of small, airless bodies
//! such as the ice-bearing nuclei of comets.

pub mod sublimation;
