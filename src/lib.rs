pub mod error;
pub mod transforms;
pub mod server;


pub use error::TransformError;
pub use transforms::{diffs, pchanges, pdiffs, ratios, Transform, DEFAULT_LAG};
pub use transforms::lag::Lag;
pub use transforms::registry::{EntryPoint, TransformRegistry};
pub use server::{run_server, ApiError, AppState, ServerConfig};
