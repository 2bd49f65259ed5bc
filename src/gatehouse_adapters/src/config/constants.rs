use std::sync::LazyLock;

use crate::config::settings::GatehouseSetting;

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "GATEHOUSE_ALLOWED_ORIGINS";
}

pub static SESSION_COOKIE_NAME: LazyLock<&'static str> = LazyLock::new(|| {
    let cookie_name = GatehouseSetting::load().session.cookie_name.clone();
    Box::leak(cookie_name.into_boxed_str())
});
