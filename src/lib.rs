//! Client-side registration and browsing of orphanage listings.
//!
//! The registration flow runs in two steps: a [`screens::PositionSelector`]
//! picks a point on the map and hands it over through a typed
//! [`navigation::Route`], then a [`screens::ListingDataScreen`] collects the
//! remaining fields and images and submits them as a single multipart
//! request through a [`api::ListingApi`].

pub mod api;
pub mod config;
pub mod media;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod submission;
