pub mod price;
pub mod report;
pub mod signal;
pub mod tier;

pub use price::*;
pub use report::*;
pub use signal::*;
pub use tier::*;
