pub mod http_client;
pub mod params;
pub mod urls;
mod client;

mod championships;
mod games;
mod hubs;
mod leaderboards;
mod matches;
mod organizers;
mod players;
mod rankings;
mod search;
mod teams;
mod tournaments;

// Re-export the client and its building blocks
pub use client::{ApiResult, FaceitData};
pub use http_client::{
    Header, HttpTransport, ReqwestTransport, TransportResponse, create_http_client_with_timeout,
};
pub use params::{MatchType, TournamentType};
pub use urls::RequestUrl;
