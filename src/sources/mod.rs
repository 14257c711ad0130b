pub mod feargreed;
pub mod upbit;
pub mod yahoo;

pub use feargreed::{FearGreedClient, SentimentSample};
pub use upbit::UpbitClient;
pub use yahoo::YahooClient;
