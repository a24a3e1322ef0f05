pub mod json_file;
pub mod mock;
pub mod remote;
pub mod traits;

pub use json_file::JsonFileSource;
pub use mock::MockSource;
pub use remote::RemoteSource;
pub use traits::ListingSource;

use anyhow::Result;

/// Pick a source from a location string: "mock", an http(s) URL, or a file path
pub fn source_from_location(location: &str) -> Result<Box<dyn ListingSource>> {
    if location.eq_ignore_ascii_case("mock") {
        Ok(Box::new(MockSource::new()))
    } else if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(RemoteSource::new(location)?))
    } else {
        Ok(Box::new(JsonFileSource::new(location)))
    }
}
