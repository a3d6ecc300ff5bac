mod root;
mod state;

pub(crate) use state::FetchState;

pub use root::App;
