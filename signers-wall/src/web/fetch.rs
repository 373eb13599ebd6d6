use gloo::net::http::Request;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::runtime::LoadError;

pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response =
        Request::get(url).send().await.map_err(|err| LoadError::Request {
            url: url.to_string(),
            message: err.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|err| LoadError::Request {
        url: url.to_string(),
        message: err.to_string(),
    })
}

/// Fresh generator per load so every load gets a new order.
pub fn fresh_rng() -> SmallRng {
    let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let clock = js_sys::Date::now().to_bits();
    SmallRng::seed_from_u64(noise ^ clock)
}
