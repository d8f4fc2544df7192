pub mod api;
pub mod config;
pub mod form;
pub mod grouping;
pub mod http_client;
pub mod identity;
pub mod model;
pub mod outcome;
pub mod provider;
pub mod sorting;
pub mod state;
pub mod views;
pub mod week;
