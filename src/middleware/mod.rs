mod access_log;
mod auth;
mod locale;
mod rate_limit;
mod recovery;
mod timeout;

pub use self::{
    access_log::access_log, auth::auth, locale::translations, rate_limit::rate_limit,
    recovery::handle_panic, timeout::context_timeout,
};
