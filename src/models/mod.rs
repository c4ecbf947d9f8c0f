// import modules
mod post;
mod api;

// export modules
pub use post::*;
pub use api::*;
