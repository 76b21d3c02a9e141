pub use echo::{Echo, Exchange, Icmp};
pub use probe::Probe;
pub use series::Series;
pub use session::{Session, Target};

pub(crate) mod echo;
mod probe;
mod series;
mod session;
