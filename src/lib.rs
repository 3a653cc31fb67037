//! desagis - Land-parcel area, boundary containment and road length for village GIS data

pub mod config;
pub mod domain;
pub mod facade;
pub mod geometry;
pub mod storage;
